// src/params.rs
use std::path::PathBuf;

pub const HOST: &str = "atcoder.jp";
pub const ARCHIVE_PATH: &str = "/contests/archive?ratedType=0&category=1200&keyword=";

/// Where per-contest result exports live, one `result_<slug>.csv` per contest.
pub const DEFAULT_CSV_DIR: &str = "csv";
/// Artifact directories inside the front end's public tree.
pub const DEFAULT_RESULTS_DIR: &str =
    "../atcoder-marathon-rating-history-frontend/public/json/results";
pub const DEFAULT_CONTESTS_DIR: &str =
    "../atcoder-marathon-rating-history-frontend/public/json/contests";

/// The three rated marathon slug shapes. Everything else in the archive
/// (beginner contests, sponsored one-offs) is ignored.
pub const RATED_SLUG_PATTERN: &str = r"^(ahc\d{3}|rcl-contest-2021-long|future-contest-2022-qual)$";

#[derive(Clone)]
pub struct Params {
    pub csv_dir: PathBuf,      // per-contest result CSVs (input)
    pub results_dir: PathBuf,  // per-contest JSON artifacts (output)
    pub contests_dir: PathBuf, // contest index JSON (output)
}

impl Params {
    pub fn new() -> Self {
        Self {
            csv_dir: PathBuf::from(DEFAULT_CSV_DIR),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            contests_dir: PathBuf::from(DEFAULT_CONTESTS_DIR),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
