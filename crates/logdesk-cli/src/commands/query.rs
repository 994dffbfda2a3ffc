//! Query command implementation.
//!
//! Prints the lines of a day matching a keyword and time window.

use std::io::Write;

use logdesk_core::{LogEngine, LogicalDate, QueryCriteria, TimeOfDay};
use serde::Serialize;

use crate::cli::{AppArgs, QueryArgs};
use crate::commands::{engine_for_app, non_blank};
use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

/// Handler for the query command.
pub struct QueryCommand<'a> {
    engine: &'a LogEngine,
}

impl<'a> QueryCommand<'a> {
    /// Creates a new query command handler.
    #[must_use]
    pub const fn new(engine: &'a LogEngine) -> Self {
        Self { engine }
    }

    /// Executes the query command.
    ///
    /// # Errors
    ///
    /// Returns error if the date or times are malformed or the log
    /// directory is unusable.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        args: &QueryArgs,
    ) -> Result<(), CliError> {
        let criteria = build_criteria(args)?;
        let engine = engine_for_app(self.engine, &args.target);
        let lines = engine.query_logs(&criteria)?;

        format.write(out, &LogLines(lines))
    }
}

/// Turns raw arguments into validated criteria.
///
/// A missing or blank bound defaults to the start or end of the day. An
/// inverted window is kept as given and matches nothing.
fn build_criteria(args: &QueryArgs) -> Result<QueryCriteria, CliError> {
    let date = LogicalDate::parse(args.date.trim())?;
    let start = match non_blank(args.start.as_deref()) {
        Some(s) => TimeOfDay::parse_start(s)?,
        None => TimeOfDay::start_of_day(),
    };
    let end = match non_blank(args.end.as_deref()) {
        Some(s) => TimeOfDay::parse_end(s)?,
        None => TimeOfDay::end_of_day(),
    };

    let mut criteria = QueryCriteria::for_date(date).with_time_window(start, end);
    if let Some(keyword) = args.keyword.as_deref() {
        criteria = criteria.with_keyword(keyword);
    }
    if let Some(file) = non_blank(args.file.as_deref()) {
        criteria = criteria.with_file_name(file);
    }
    Ok(criteria)
}

// Output types

/// Matching lines, in reading order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct LogLines(pub Vec<String>);

impl TableDisplay for LogLines {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        for line in &self.0 {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use logdesk_core::LogError;

    fn args(date: &str) -> QueryArgs {
        QueryArgs {
            date: date.to_string(),
            keyword: None,
            start: None,
            end: None,
            file: None,
            target: AppArgs::default(),
        }
    }

    #[test]
    fn criteria_default_to_whole_day() {
        let criteria = build_criteria(&args("2024-01-02")).expect("valid");
        assert_eq!(criteria.date.as_str(), "2024-01-02");
        assert_eq!(criteria.start_time, TimeOfDay::start_of_day());
        assert_eq!(criteria.end_time, TimeOfDay::end_of_day());
        assert!(criteria.keyword.is_none());
        assert!(criteria.file_name.is_none());
    }

    #[test]
    fn criteria_normalize_minute_bounds() {
        let mut a = args("2024-01-02");
        a.start = Some("09:30".into());
        a.end = Some("09:45".into());
        let criteria = build_criteria(&a).expect("valid");
        assert_eq!(criteria.start_time.as_str(), "09:30:00");
        assert_eq!(criteria.end_time.as_str(), "09:45:59");
    }

    #[test]
    fn criteria_treat_blank_values_as_absent() {
        let mut a = args(" 2024-01-02 ");
        a.start = Some(String::new());
        a.end = Some("  ".into());
        a.keyword = Some(String::new());
        a.file = Some(" ".into());
        let criteria = build_criteria(&a).expect("valid");
        assert_eq!(criteria.start_time, TimeOfDay::start_of_day());
        assert_eq!(criteria.end_time, TimeOfDay::end_of_day());
        assert!(criteria.keyword.is_none());
        assert!(criteria.file_name.is_none());
    }

    #[test]
    fn criteria_keep_whitespace_keyword() {
        let mut a = args("2024-01-02");
        a.keyword = Some("  ".into());
        let criteria = build_criteria(&a).expect("valid");
        assert_eq!(criteria.keyword.as_deref(), Some("  "));
    }

    #[test]
    fn criteria_reject_bad_date() {
        let err = build_criteria(&args("02/01/2024")).expect_err("invalid");
        assert!(matches!(err, CliError::Log(LogError::InvalidDate(_))));
    }

    #[test]
    fn criteria_keep_inverted_window() {
        let mut a = args("2024-01-02");
        a.start = Some("10:00".into());
        a.end = Some("09:00".into());
        let criteria = build_criteria(&a).expect("accepted");
        assert!(criteria.is_inverted());
        assert_eq!(criteria.start_time.as_str(), "10:00:00");
        assert_eq!(criteria.end_time.as_str(), "09:00:59");
    }

    #[test]
    fn log_lines_table_prints_verbatim() {
        let lines = LogLines(vec![
            "2024-01-02 10:00:00 ERROR boom".into(),
            "\tat Job.run".into(),
        ]);
        let output = OutputFormat::new(Format::Table)
            .to_string(&lines)
            .expect("should format");
        assert_eq!(output, "2024-01-02 10:00:00 ERROR boom\n\tat Job.run\n");
    }

    #[test]
    fn log_lines_json_is_an_array() {
        let lines = LogLines(vec!["a".into()]);
        let output = OutputFormat::new(Format::Json)
            .to_string(&lines)
            .expect("should format");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(parsed["data"], serde_json::json!(["a"]));
    }
}
