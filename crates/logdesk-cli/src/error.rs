//! CLI error types.

use logdesk_core::LogError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the request or could not use the log directory.
    #[error(transparent)]
    Log(#[from] LogError),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
