//! Log file name classification and ordering.
//!
//! An application writes `<prefix>.log` and an external rotator archives it
//! as `<prefix>.<YYYY-MM-DD>.<N>.log`. This module recognizes both forms,
//! decides which files belong to a logical date, and orders files so that
//! reading them in sequence yields the log in write order.

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::config::DateMatch;
use crate::types::{LogicalDate, is_date_shaped};

/// Log file extension, including the dot.
pub const LOG_EXTENSION: &str = ".log";

/// Sort key of a log file.
///
/// Variant order is the file order: unrecognized names first, rotated files
/// by date then numeric sequence, the active file last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileKind {
    /// Name does not follow either naming scheme.
    Unrecognized,
    /// An archived file.
    Rotated {
        /// Rotation date as written in the name.
        date: String,
        /// Rotation sequence within the date.
        sequence: u64,
    },
    /// The file currently being written.
    Active,
}

/// A candidate log file found in the application log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// File name without directory.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Classification of the name.
    pub kind: FileKind,
}

impl LogFile {
    /// Returns true for `<prefix>.log`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.kind, FileKind::Active)
    }

    /// Rotation date, for rotated files.
    #[must_use]
    pub fn rotation_date(&self) -> Option<&str> {
        match &self.kind {
            FileKind::Rotated { date, .. } => Some(date),
            _ => None,
        }
    }

    /// Rotation sequence; zero for files that are not rotated.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        match self.kind {
            FileKind::Rotated { sequence, .. } => sequence,
            _ => 0,
        }
    }
}

impl Ord for LogFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for LogFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Naming rules for one log stream, keyed by its file prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogNaming {
    prefix: String,
    active_name: String,
}

impl LogNaming {
    /// Creates naming rules for `prefix` (e.g. `task-center-info`).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let active_name = format!("{prefix}{LOG_EXTENSION}");
        Self {
            prefix,
            active_name,
        }
    }

    /// The configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the active file, `<prefix>.log`.
    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    /// Classifies a file name.
    #[must_use]
    pub fn classify(&self, name: &str) -> FileKind {
        if name == self.active_name {
            return FileKind::Active;
        }
        self.parse_rotated(name)
            .map_or(FileKind::Unrecognized, |(date, sequence)| FileKind::Rotated {
                date: date.to_string(),
                sequence,
            })
    }

    /// Extracts the rotation date from `<prefix>.<YYYY-MM-DD>.<N>.log`.
    #[must_use]
    pub fn rotation_date<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.parse_rotated(name).map(|(date, _)| date)
    }

    /// True when the name starts with the prefix and ends in `.log`.
    #[must_use]
    pub fn belongs_to_stream(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(LOG_EXTENSION)
    }

    /// Decides whether `name` is a candidate file for logical date `date`.
    ///
    /// The active file belongs to `today` only. Under [`DateMatch::Substring`]
    /// any stream file whose name contains the date string is selected; under
    /// [`DateMatch::Exact`] only rotated files with that rotation date are.
    #[must_use]
    pub fn selects(
        &self,
        name: &str,
        date: &LogicalDate,
        today: &LogicalDate,
        mode: DateMatch,
    ) -> bool {
        if name == self.active_name {
            return date == today;
        }
        match mode {
            DateMatch::Substring => {
                self.belongs_to_stream(name) && name.contains(date.as_str())
            }
            DateMatch::Exact => self.rotation_date(name) == Some(date.as_str()),
        }
    }

    /// Builds a [`LogFile`] for a directory entry.
    #[must_use]
    pub fn describe(&self, name: String, path: PathBuf) -> LogFile {
        let kind = self.classify(&name);
        LogFile { name, path, kind }
    }

    fn parse_rotated<'a>(&self, name: &'a str) -> Option<(&'a str, u64)> {
        let rest = name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix('.')?
            .strip_suffix(LOG_EXTENSION)?;
        let (date, sequence) = rest.split_once('.')?;
        if !is_date_shaped(date) || sequence.is_empty() {
            return None;
        }
        if !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Digits only, so the parse can fail solely on overflow.
        let sequence = sequence.parse::<u64>().unwrap_or(u64::MAX);
        Some((date, sequence))
    }
}

/// Sorts files into reading order.
pub fn sort_files(files: &mut [LogFile]) {
    files.sort();
}
