//! Engine configuration.

use std::path::{Path, PathBuf};

/// Default root directory holding one sub-directory per application.
pub const DEFAULT_LOG_ROOT: &str = "./data/logs";

/// Default application name.
pub const DEFAULT_APP_NAME: &str = "task-center";

/// Default log file prefix.
pub const DEFAULT_LOG_PREFIX: &str = "task-center-info";

/// Default ceiling on lines returned by one query.
pub const DEFAULT_MAX_TOTAL_LINES: usize = 5000;

/// Default ceiling on lines contributed by a single file.
pub const DEFAULT_MAX_LINES_PER_FILE: usize = 2000;

/// How rotated files are matched against a requested date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateMatch {
    /// Any `<prefix>*.log` file whose name contains the date string.
    #[default]
    Substring,
    /// Only `<prefix>.<date>.<N>.log` files with exactly that date.
    Exact,
}

/// Result-size caps bounding the work and memory of one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Maximum lines returned overall.
    pub max_total_lines: usize,
    /// Maximum lines taken from any one file.
    pub max_lines_per_file: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_total_lines: DEFAULT_MAX_TOTAL_LINES,
            max_lines_per_file: DEFAULT_MAX_LINES_PER_FILE,
        }
    }
}

impl QueryLimits {
    /// Creates limits with the given caps.
    #[must_use]
    pub const fn new(max_total_lines: usize, max_lines_per_file: usize) -> Self {
        Self {
            max_total_lines,
            max_lines_per_file,
        }
    }
}

/// Configuration for a [`LogEngine`](crate::LogEngine).
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Root directory; the application's logs live in `log_root/app_name`.
    pub log_root: PathBuf,
    /// Application name, used as the sub-directory name.
    pub app_name: String,
    /// File prefix of the log stream.
    pub log_prefix: String,
    /// Result-size caps.
    pub limits: QueryLimits,
    /// Rotated-file date matching rule.
    pub date_match: DateMatch,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_root: PathBuf::from(DEFAULT_LOG_ROOT),
            app_name: DEFAULT_APP_NAME.to_string(),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            limits: QueryLimits::default(),
            date_match: DateMatch::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a config with the given root directory.
    #[must_use]
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self {
            log_root: log_root.into(),
            ..Default::default()
        }
    }

    /// Sets the application name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Sets the log file prefix.
    #[must_use]
    pub fn with_log_prefix(mut self, log_prefix: impl Into<String>) -> Self {
        self.log_prefix = log_prefix.into();
        self
    }

    /// Sets the result-size caps.
    #[must_use]
    pub const fn with_limits(mut self, limits: QueryLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the date matching rule.
    #[must_use]
    pub const fn with_date_match(mut self, date_match: DateMatch) -> Self {
        self.date_match = date_match;
        self
    }

    /// Directory holding this application's log files.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.log_root.join(&self.app_name)
    }

    /// Root directory shared by all applications.
    #[must_use]
    pub fn log_root(&self) -> &Path {
        &self.log_root
    }
}
