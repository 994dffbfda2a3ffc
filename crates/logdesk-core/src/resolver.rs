//! Locating candidate log files on disk.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DateMatch, EngineConfig};
use crate::error::{LogError, Result};
use crate::naming::{LOG_EXTENSION, LogFile, LogNaming};
use crate::types::{LogicalDate, QueryCriteria};

/// Finds the log files of one application.
///
/// Every call lists the directory afresh; nothing is cached.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    log_dir: PathBuf,
    naming: LogNaming,
    date_match: DateMatch,
}

impl DirectoryResolver {
    /// Creates a resolver for the application described by `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            log_dir: config.log_dir(),
            naming: LogNaming::new(config.log_prefix.clone()),
            date_match: config.date_match,
        }
    }

    /// The application log directory.
    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Naming rules in use.
    #[must_use]
    pub const fn naming(&self) -> &LogNaming {
        &self.naming
    }

    /// Resolves the files a query should read, unsorted.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogDirectory`] if the directory cannot be created
    /// or listed.
    pub fn resolve(&self, criteria: &QueryCriteria, today: &LogicalDate) -> Result<Vec<LogFile>> {
        let files = match criteria.file_name.as_deref() {
            Some(name) => self.resolve_name(name)?.into_iter().collect(),
            None => self.resolve_date(&criteria.date, today)?,
        };
        if files.is_empty() {
            info!(
                path = %self.log_dir.display(),
                date = %criteria.date,
                file = criteria.file_name.as_deref().unwrap_or(""),
                "no matching log files"
            );
        }
        Ok(files)
    }

    /// Resolves the files belonging to a logical date, unsorted.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogDirectory`] if the directory cannot be created
    /// or listed.
    pub fn resolve_date(&self, date: &LogicalDate, today: &LogicalDate) -> Result<Vec<LogFile>> {
        self.scan(|name| self.naming.selects(name, date, today, self.date_match))
    }

    /// Looks up a single file by exact name.
    ///
    /// Names that are not a bare file name (path separators, `..`) never
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogDirectory`] if the directory cannot be created.
    pub fn resolve_name(&self, name: &str) -> Result<Option<LogFile>> {
        self.ensure_dir()?;
        if Path::new(name).file_name() != Some(OsStr::new(name)) {
            debug!(file = name, "rejected file name with path components");
            return Ok(None);
        }
        let path = self.log_dir.join(name);
        if !is_regular_file(&path) {
            return Ok(None);
        }
        Ok(Some(self.naming.describe(name.to_string(), path)))
    }

    /// Lists every `.log` file of the stream (name starts with the prefix).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogDirectory`] if the directory cannot be created
    /// or listed.
    pub fn stream_files(&self) -> Result<Vec<LogFile>> {
        self.scan(|name| self.naming.belongs_to_stream(name))
    }

    /// Creates the log directory if it does not exist yet.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.log_dir).map_err(|source| LogError::LogDirectory {
            path: self.log_dir.clone(),
            source,
        })
    }

    /// Lists regular `.log` files whose name satisfies `keep`.
    fn scan(&self, keep: impl Fn(&str) -> bool) -> Result<Vec<LogFile>> {
        self.ensure_dir()?;
        let entries = fs::read_dir(&self.log_dir).map_err(|source| LogError::LogDirectory {
            path: self.log_dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let Ok(name) = entry.file_name().into_string() else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };
            if !name.ends_with(LOG_EXTENSION) || !keep(&name) {
                continue;
            }
            let path = entry.path();
            if !is_regular_file(&path) {
                continue;
            }
            files.push(self.naming.describe(name, path));
        }
        Ok(files)
    }
}

/// Regular file, following symlinks.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}
