//! Core types for log queries.
//!
//! This module provides:
//! - [`LogicalDate`] - Fixed-width `YYYY-MM-DD` date
//! - [`TimeOfDay`] - Validated `HH:MM:SS` wall-clock time
//! - [`QueryCriteria`] - What a log query asks for
//! - [`FileTimeRange`] - Earliest and latest timestamp found in one file

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{LogError, Result};

/// Marker reported for a time bound that could not be determined.
pub const UNKNOWN_TIME: &str = "unknown";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date in `YYYY-MM-DD` form.
///
/// Only the shape is checked: rotated file names carry whatever date the
/// rotator wrote, and a name like `app.2024-13-40.1.log` must still be
/// listable and queryable. Ordering is plain string ordering, which is
/// chronological for real dates in this fixed-width format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalDate(String);

impl LogicalDate {
    /// Parses a zero-padded `NNNN-NN-NN` date.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidDate`] if the input is not four digits,
    /// a dash, two digits, a dash and two digits.
    pub fn parse(input: &str) -> Result<Self> {
        if !is_date_shaped(input) {
            return Err(LogError::InvalidDate(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// Formats a chrono date.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// Returns the date as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LogicalDate {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LogicalDate> for String {
    fn from(date: LogicalDate) -> Self {
        date.0
    }
}

/// A wall-clock time of day in `HH:MM:SS` form (24-hour, zero-padded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    /// The first second of a day.
    #[must_use]
    pub fn start_of_day() -> Self {
        Self("00:00:00".to_string())
    }

    /// The last second of a day.
    #[must_use]
    pub fn end_of_day() -> Self {
        Self("23:59:59".to_string())
    }

    /// Parses a strict `HH:MM:SS` time.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidTime`] for anything else.
    pub fn parse(input: &str) -> Result<Self> {
        match split_clock(input) {
            Some((h, m, Some(s))) => Ok(Self(format!("{h:02}:{m:02}:{s:02}"))),
            _ => Err(LogError::InvalidTime(input.to_string())),
        }
    }

    /// Parses the start of a window. `HH:MM` becomes `HH:MM:00`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidTime`] if the input is malformed.
    pub fn parse_start(input: &str) -> Result<Self> {
        Self::parse_with_seconds(input, 0)
    }

    /// Parses the end of a window. `HH:MM` becomes `HH:MM:59`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidTime`] if the input is malformed.
    pub fn parse_end(input: &str) -> Result<Self> {
        Self::parse_with_seconds(input, 59)
    }

    fn parse_with_seconds(input: &str, default_seconds: u32) -> Result<Self> {
        let (h, m, s) =
            split_clock(input).ok_or_else(|| LogError::InvalidTime(input.to_string()))?;
        let s = s.unwrap_or(default_seconds);
        Ok(Self(format!("{h:02}:{m:02}:{s:02}")))
    }

    /// Returns the time as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `NNNN-NN-NN` with ASCII digits.
pub(crate) fn is_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Splits `HH:MM` or `HH:MM:SS` into validated components.
fn split_clock(input: &str) -> Option<(u32, u32, Option<u32>)> {
    let mut parts = input.split(':');
    let h = two_digits(parts.next()?, 24)?;
    let m = two_digits(parts.next()?, 60)?;
    let s = match parts.next() {
        Some(part) => Some(two_digits(part, 60)?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((h, m, s))
}

fn two_digits(part: &str, bound: u32) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok().filter(|v| *v < bound)
}

/// What a log query asks for.
///
/// When [`file_name`](Self::file_name) is set the engine reads only that file
/// and ignores [`date`](Self::date) for file selection. Time and keyword
/// filters apply to lines either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    /// Logical date used to select files.
    pub date: LogicalDate,
    /// Case-insensitive substring every returned line must contain.
    pub keyword: Option<String>,
    /// Inclusive window start.
    pub start_time: TimeOfDay,
    /// Inclusive window end.
    pub end_time: TimeOfDay,
    /// Exact file name to read instead of date-based selection.
    pub file_name: Option<String>,
}

impl QueryCriteria {
    /// Creates criteria for a whole day with no keyword.
    #[must_use]
    pub fn for_date(date: LogicalDate) -> Self {
        Self {
            date,
            keyword: None,
            start_time: TimeOfDay::start_of_day(),
            end_time: TimeOfDay::end_of_day(),
            file_name: None,
        }
    }

    /// Sets the keyword. An empty keyword means no keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keyword = (!keyword.is_empty()).then_some(keyword);
        self
    }

    /// Sets the inclusive time-of-day window.
    ///
    /// A window whose start lies after its end is kept as given and
    /// matches no line.
    #[must_use]
    pub fn with_time_window(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    /// Returns true when the window starts after it ends.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start_time > self.end_time
    }

    /// Restricts the query to one file. An empty name means no restriction.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        self.file_name = (!file_name.is_empty()).then_some(file_name);
        self
    }
}

/// Earliest and latest embedded timestamp of one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTimeRange {
    /// File name within the application log directory.
    pub file_name: String,
    /// Smallest `YYYY-MM-DD HH:MM:SS` found, if any.
    #[serde(serialize_with = "serialize_bound")]
    pub earliest_time: Option<String>,
    /// Largest `YYYY-MM-DD HH:MM:SS` found, if any.
    #[serde(serialize_with = "serialize_bound")]
    pub latest_time: Option<String>,
}

impl FileTimeRange {
    /// Earliest timestamp, or [`UNKNOWN_TIME`].
    #[must_use]
    pub fn earliest_or_unknown(&self) -> &str {
        self.earliest_time.as_deref().unwrap_or(UNKNOWN_TIME)
    }

    /// Latest timestamp, or [`UNKNOWN_TIME`].
    #[must_use]
    pub fn latest_or_unknown(&self) -> &str {
        self.latest_time.as_deref().unwrap_or(UNKNOWN_TIME)
    }
}

#[allow(clippy::ref_option)]
fn serialize_bound<S: Serializer>(
    bound: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(bound.as_deref().unwrap_or(UNKNOWN_TIME))
}
