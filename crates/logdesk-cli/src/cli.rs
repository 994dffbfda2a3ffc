//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use logdesk_core::config::{DEFAULT_APP_NAME, DEFAULT_LOG_PREFIX, DEFAULT_LOG_ROOT};
use logdesk_core::{DateMatch, EngineConfig};

/// Logdesk - query rotated application logs by date, keyword and time.
#[derive(Parser, Debug, Clone)]
#[command(name = "logdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory holding one log directory per application.
    #[arg(long, env = "LOG_PATH", default_value = DEFAULT_LOG_ROOT)]
    pub log_root: PathBuf,

    /// Application whose logs are read by default.
    #[arg(long, env = "APP_NAME", default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// File name prefix of the log stream.
    #[arg(long, env = "LOG_PREFIX", default_value = DEFAULT_LOG_PREFIX)]
    pub log_prefix: String,

    /// Select files by exact rotation date instead of a substring match.
    #[arg(
        long,
        env = "LOGDESK_STRICT_DATES",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub strict_dates: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the engine configuration from the global flags.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        let date_match = if self.strict_dates {
            DateMatch::Exact
        } else {
            DateMatch::Substring
        };
        EngineConfig::new(&self.log_root)
            .with_app_name(&self.app_name)
            .with_log_prefix(&self.log_prefix)
            .with_date_match(date_match)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum Format {
    /// Human-readable output.
    #[default]
    Table,
    /// JSON envelope for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the log lines of a day that match a keyword and time window.
    Query(QueryArgs),

    /// List the dates that have logs.
    Dates {
        #[command(flatten)]
        target: AppArgs,
    },

    /// List the files of a date with their earliest and latest timestamps.
    Files {
        /// Date to inspect (YYYY-MM-DD).
        date: String,

        #[command(flatten)]
        target: AppArgs,
    },
}

/// Selects another application's logs for a single call.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppArgs {
    /// Read another application's logs for this call.
    #[arg(long)]
    pub app: Option<String>,

    /// File name prefix of that application's logs (defaults to --log-prefix).
    #[arg(long, requires = "app")]
    pub prefix: Option<String>,
}

/// Arguments for the query command.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Date to search (YYYY-MM-DD).
    pub date: String,

    /// Case-insensitive substring a line must contain.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Start of the time window (HH:MM or HH:MM:SS).
    #[arg(short, long)]
    pub start: Option<String>,

    /// End of the time window (HH:MM or HH:MM:SS).
    #[arg(short, long)]
    pub end: Option<String>,

    /// Read only this file, whatever the date.
    #[arg(long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub target: AppArgs,
}
