//! The log query engine.
//!
//! [`LogEngine`] answers the three questions operators ask of an
//! application's logs:
//! - which lines of a day match a keyword and time window
//!   ([`query_logs`](LogEngine::query_logs))
//! - which days have logs ([`list_available_dates`](LogEngine::list_available_dates))
//! - what time span each file of a day covers
//!   ([`list_files_for_date`](LogEngine::list_files_for_date))
//!
//! Every call is a pure function of the configuration, the current directory
//! listing and the request. The engine keeps no mutable state and can be
//! shared freely between threads.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::decode::DecodedLines;
use crate::error::Result;
use crate::filter::LineFilter;
use crate::naming::{LogFile, sort_files};
use crate::range;
use crate::resolver::DirectoryResolver;
use crate::types::{FileTimeRange, LogicalDate, QueryCriteria};

/// Read-only query engine over one application's log directory.
#[derive(Clone)]
pub struct LogEngine {
    config: EngineConfig,
    resolver: DirectoryResolver,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for LogEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LogEngine {
    /// Creates an engine using the local system date as "today".
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let resolver = DirectoryResolver::new(&config);
        Self {
            config,
            resolver,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to attribute the active file to a date.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns an engine for another application under the same root.
    ///
    /// Each application names its files with its own prefix. Limits,
    /// matching rule and clock are shared.
    #[must_use]
    pub fn for_app(&self, app_name: impl Into<String>, log_prefix: impl Into<String>) -> Self {
        let config = self
            .config
            .clone()
            .with_app_name(app_name)
            .with_log_prefix(log_prefix);
        let resolver = DirectoryResolver::new(&config);
        Self {
            config,
            resolver,
            clock: Arc::clone(&self.clock),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the lines matching `criteria`, in file order then line order.
    ///
    /// At most `max_lines_per_file` lines come from one file and at most
    /// `max_total_lines` overall; reading stops as soon as the overall cap
    /// is reached. A file that fails to open or read is logged and skipped,
    /// keeping whatever it contributed before the failure.
    ///
    /// # Errors
    ///
    /// Returns an error only if the log directory cannot be created or
    /// listed.
    pub fn query_logs(&self, criteria: &QueryCriteria) -> Result<Vec<String>> {
        let today = self.clock.today();
        let mut files = self.resolver.resolve(criteria, &today)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }
        sort_files(&mut files);

        if criteria.is_inverted() {
            debug!(
                start = %criteria.start_time,
                end = %criteria.end_time,
                "time window starts after it ends, no line can match"
            );
        }
        let filter = LineFilter::from_criteria(criteria);
        let results = self.collect(&files, &filter);
        info!(
            app = %self.config.app_name,
            date = %criteria.date,
            files = files.len(),
            lines = results.len(),
            "log query complete"
        );
        Ok(results)
    }

    /// Lists every date that has logs, ascending.
    ///
    /// Rotated files contribute their rotation date; the active file
    /// contributes today.
    ///
    /// # Errors
    ///
    /// Returns an error only if the log directory cannot be created or
    /// listed.
    pub fn list_available_dates(&self) -> Result<Vec<LogicalDate>> {
        let today = self.clock.today();
        let mut dates = BTreeSet::new();

        for file in self.resolver.stream_files()? {
            if let Some(date) = file.rotation_date() {
                match LogicalDate::parse(date) {
                    Ok(date) => {
                        dates.insert(date);
                    }
                    Err(e) => debug!(file = %file.name, error = %e, "skipping rotation date"),
                }
            } else if file.is_active() {
                dates.insert(today.clone());
            }
        }
        Ok(dates.into_iter().collect())
    }

    /// Lists the files of `date` with the time span each one covers.
    ///
    /// Files are in reading order. Unreadable files are left out; files
    /// without timestamps report unknown bounds.
    ///
    /// # Errors
    ///
    /// Returns an error only if the log directory cannot be created or
    /// listed.
    pub fn list_files_for_date(&self, date: &LogicalDate) -> Result<Vec<FileTimeRange>> {
        let today = self.clock.today();
        let mut files = self.resolver.resolve_date(date, &today)?;
        sort_files(&mut files);
        let ranges = range::analyze(&files);
        debug!(date = %date, files = ranges.len(), "file ranges computed");
        Ok(ranges)
    }

    fn collect(&self, files: &[LogFile], filter: &LineFilter) -> Vec<String> {
        let limits = self.config.limits;
        let mut results = Vec::new();

        for file in files {
            let remaining = limits.max_total_lines.saturating_sub(results.len());
            if remaining == 0 {
                debug!(limit = limits.max_total_lines, "result cap reached");
                break;
            }
            debug!(file = %file.name, "processing log file");

            let reader = match File::open(&file.path) {
                Ok(f) => BufReader::new(f),
                Err(e) => {
                    warn!(file = %file.name, error = %e, "failed to open log file, skipping");
                    continue;
                }
            };
            let cap = remaining.min(limits.max_lines_per_file);
            if let Err(e) = collect_matches(reader, filter, cap, &mut results) {
                warn!(file = %file.name, error = %e, "failed to read log file, skipping rest");
            }
        }
        results
    }
}

/// Appends up to `cap` matching lines from `reader` to `out`.
///
/// Lines matched before a read error stay in `out`.
fn collect_matches<R: BufRead>(
    reader: R,
    filter: &LineFilter,
    cap: usize,
    out: &mut Vec<String>,
) -> io::Result<usize> {
    let mut taken = 0;
    if cap == 0 {
        return Ok(taken);
    }
    for line in DecodedLines::new(reader) {
        let line = line?;
        if filter.matches(&line) {
            out.push(line);
            taken += 1;
            if taken == cap {
                break;
            }
        }
    }
    Ok(taken)
}
