//! Error types for the log engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the log engine.
///
/// Per-file read failures never appear here: they are logged and the file is
/// skipped. Only malformed input and unusable configuration reach the caller.
#[derive(Debug, Error)]
pub enum LogError {
    /// A date was not shaped `YYYY-MM-DD`.
    #[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A time of day was not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time of day: {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    /// The application log directory could not be created or listed.
    #[error("log directory {}: {source}", path.display())]
    LogDirectory {
        /// Directory the engine tried to use.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, LogError>;
