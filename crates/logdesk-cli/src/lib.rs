//! # logdesk-cli
//!
//! Command-line front end for the `logdesk-core` engine.
//!
//! Provides commands for:
//! - Searching a day's log lines by keyword and time window
//! - Listing the dates that have logs
//! - Listing a day's files with their time ranges
//!
//! Configuration comes from flags or the `LOG_PATH`, `APP_NAME`,
//! `LOG_PREFIX` and `LOGDESK_STRICT_DATES` environment variables. With
//! `--format json` every result, including failures, is printed as a
//! `{"success", "data", "message"}` envelope.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format, QueryArgs};
pub use error::CliError;
pub use output::OutputFormat;
