//! Embedded timestamp extraction.
//!
//! Log lines carry a `YYYY-MM-DD HH:MM:SS` timestamp somewhere in their
//! prefix. The extractor returns it unparsed: the format is fixed-width and
//! zero-padded, so string comparison orders timestamps chronologically.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `YYYY-MM-DD HH:MM:SS` run in a line (ASCII digits only).
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}")
        .unwrap_or_else(|_| unreachable!())
});

/// Returns the first embedded timestamp in `line`, if any.
#[must_use]
pub fn extract(line: &str) -> Option<&str> {
    TIMESTAMP_REGEX.find(line).map(|m| m.as_str())
}

/// Returns the `HH:MM:SS` part of an extracted timestamp.
#[must_use]
pub fn time_of_day(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(_, time)| time)
}
