// src/error.rs
//! Error taxonomy for the preprocessor.
//!
//! Three things can go wrong that we care to distinguish: a result CSV is
//! broken (`MalformedRow`), the archive listing could not be fetched
//! (`NetworkFetch`), or the reconciliation pass tripped over its own
//! bookkeeping (`InvariantViolation`). None of these are recovered from —
//! every one of them aborts the current run at the CLI boundary. Artifacts
//! already written earlier in the same run are left on disk.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required column is missing or a cell is not integer-parseable.
    #[error("malformed row in {file}: {reason}")]
    MalformedRow { file: String, reason: String },

    /// Non-success response (or transport failure) from the archive source.
    #[error("contest archive fetch failed: {0}")]
    NetworkFetch(String),

    /// Internal consistency failure in the reconciliation pass.
    #[error("reconciliation invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedRow { file: file.into(), reason: reason.into() }
    }
}
