//! Earliest/latest timestamp analysis of log files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::{debug, warn};

use crate::decode::DecodedLines;
use crate::naming::LogFile;
use crate::timestamp;
use crate::types::FileTimeRange;

/// Computes the time range of each file, in input order.
///
/// A file that cannot be read is left out of the result.
#[must_use]
pub fn analyze(files: &[LogFile]) -> Vec<FileTimeRange> {
    files
        .iter()
        .filter_map(|file| match analyze_file(file) {
            Ok(range) => Some(range),
            Err(e) => {
                warn!(file = %file.name, error = %e, "failed to read log file, skipping");
                None
            }
        })
        .collect()
}

fn analyze_file(file: &LogFile) -> io::Result<FileTimeRange> {
    debug!(file = %file.name, "analyzing time range");
    let reader = BufReader::new(File::open(&file.path)?);
    let (earliest_time, latest_time) = scan_bounds(reader)?;
    Ok(FileTimeRange {
        file_name: file.name.clone(),
        earliest_time,
        latest_time,
    })
}

/// Smallest and largest timestamp in a reader.
pub(crate) fn scan_bounds<R: BufRead>(reader: R) -> io::Result<(Option<String>, Option<String>)> {
    let mut earliest: Option<String> = None;
    let mut latest: Option<String> = None;

    for line in DecodedLines::new(reader) {
        let line = line?;
        let Some(ts) = timestamp::extract(&line) else {
            continue;
        };
        if earliest.as_deref().is_none_or(|e| ts < e) {
            earliest = Some(ts.to_string());
        }
        if latest.as_deref().is_none_or(|l| ts > l) {
            latest = Some(ts.to_string());
        }
    }
    Ok((earliest, latest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::LogNaming;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("read failed"))
        }
    }

    fn bounds(text: &str) -> (Option<String>, Option<String>) {
        scan_bounds(Cursor::new(text.as_bytes().to_vec())).expect("in-memory read")
    }

    #[test]
    fn bounds_are_min_and_max_regardless_of_order() {
        let (earliest, latest) = bounds(
            "2024-01-02 03:00:00 INFO late\n\
             2024-01-02 01:00:00 INFO early\n\
             2024-01-02 02:00:00 INFO middle\n",
        );
        assert_eq!(earliest.as_deref(), Some("2024-01-02 01:00:00"));
        assert_eq!(latest.as_deref(), Some("2024-01-02 03:00:00"));
    }

    #[test]
    fn bounds_span_dates() {
        let (earliest, latest) = bounds(
            "2024-01-02 00:00:01 a\n\
             2024-01-01 23:59:59 b\n",
        );
        assert_eq!(earliest.as_deref(), Some("2024-01-01 23:59:59"));
        assert_eq!(latest.as_deref(), Some("2024-01-02 00:00:01"));
    }

    #[test]
    fn bounds_ignore_untimestamped_lines() {
        let (earliest, latest) = bounds("    at Foo.bar\n2024-01-02 05:00:00 x\ncaused by\n");
        assert_eq!(earliest.as_deref(), Some("2024-01-02 05:00:00"));
        assert_eq!(latest.as_deref(), Some("2024-01-02 05:00:00"));
    }

    #[test]
    fn bounds_unknown_without_timestamps() {
        assert_eq!(bounds("no time here\n"), (None, None));
        assert_eq!(bounds(""), (None, None));
    }

    #[test]
    fn bounds_propagate_read_errors() {
        let result = scan_bounds(BufReader::new(BrokenReader));
        assert!(result.is_err());
    }

    #[test]
    fn analyze_keeps_order_and_skips_unreadable() {
        let dir = TempDir::new().expect("temp dir");
        let naming = LogNaming::new("app-info");

        let first = dir.path().join("app-info.2024-01-02.1.log");
        std::fs::write(&first, "2024-01-02 01:00:00 a\n2024-01-02 02:00:00 b\n").expect("write");
        let empty = dir.path().join("app-info.2024-01-02.2.log");
        std::fs::write(&empty, "no timestamps\n").expect("write");

        let files = vec![
            naming.describe("app-info.2024-01-02.1.log".to_string(), first),
            naming.describe(
                "app-info.2024-01-02.9.log".to_string(),
                dir.path().join("app-info.2024-01-02.9.log"),
            ),
            naming.describe("app-info.2024-01-02.2.log".to_string(), empty),
        ];

        let ranges = analyze(&files);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].file_name, "app-info.2024-01-02.1.log");
        assert_eq!(ranges[0].earliest_time.as_deref(), Some("2024-01-02 01:00:00"));
        assert_eq!(ranges[0].latest_time.as_deref(), Some("2024-01-02 02:00:00"));
        assert_eq!(ranges[1].file_name, "app-info.2024-01-02.2.log");
        assert_eq!(ranges[1].earliest_or_unknown(), "unknown");
        assert_eq!(ranges[1].latest_or_unknown(), "unknown");
    }
}
