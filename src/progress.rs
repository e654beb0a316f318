// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for the aggregation run.
/// The CLI implements this as a line printer; library callers can pass
/// `None` or a `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of matching contests.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one contest's artifact has been written.
    fn item_done(&mut self, _slug: &str, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
