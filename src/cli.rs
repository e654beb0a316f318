// src/cli.rs
use std::{env, path::Path};

use crate::aggregate;
use crate::params::Params;
use crate::progress::Progress;

/// Line-printing progress sink for terminal runs.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("{} rated contests to process", total);
    }
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn item_done(&mut self, slug: &str, path: &Path) {
        println!("{} -> {}", slug, path.display());
    }
}

/// Parse args and run. The tool takes no flags beyond the run itself;
/// anything but -h/--help is an error.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    if let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(());
            }
            other => return Err(format!("Unknown arg: {}", other).into()),
        }
    }

    let params = Params::new();
    let mut progress = ConsoleProgress;
    let summary = aggregate::run(&params, Some(&mut progress))?;
    println!("Wrote {} file(s)", summary.files_written.len());
    Ok(())
}
