//! Per-line time window and keyword filter.

use crate::timestamp;
use crate::types::{QueryCriteria, TimeOfDay};

/// Predicate applied to every line of a query.
///
/// A timestamped line passes the time check when its time of day lies in
/// the inclusive window. A line without a timestamp (stack trace,
/// continuation) passes only when the window spans the whole day.
#[derive(Debug, Clone)]
pub struct LineFilter {
    start: TimeOfDay,
    end: TimeOfDay,
    keyword: Option<String>,
    whole_day: bool,
}

impl LineFilter {
    /// Creates a filter for a window and an optional keyword.
    #[must_use]
    pub fn new(start: TimeOfDay, end: TimeOfDay, keyword: Option<&str>) -> Self {
        let whole_day =
            start <= TimeOfDay::start_of_day() && end >= TimeOfDay::end_of_day();
        Self {
            start,
            end,
            keyword: keyword.filter(|k| !k.is_empty()).map(str::to_lowercase),
            whole_day,
        }
    }

    /// Creates the filter described by query criteria.
    #[must_use]
    pub fn from_criteria(criteria: &QueryCriteria) -> Self {
        Self::new(
            criteria.start_time.clone(),
            criteria.end_time.clone(),
            criteria.keyword.as_deref(),
        )
    }

    /// Returns true if the line passes both checks.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.matches_time(line) && self.matches_keyword(line)
    }

    fn matches_time(&self, line: &str) -> bool {
        match timestamp::extract(line) {
            Some(ts) => {
                let time = timestamp::time_of_day(ts);
                self.start.as_str() <= time && time <= self.end.as_str()
            }
            None => self.whole_day,
        }
    }

    fn matches_keyword(&self, line: &str) -> bool {
        self.keyword
            .as_deref()
            .is_none_or(|k| line.to_lowercase().contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).expect("time")
    }

    fn whole_day(keyword: Option<&str>) -> LineFilter {
        LineFilter::new(TimeOfDay::start_of_day(), TimeOfDay::end_of_day(), keyword)
    }

    #[test_case("2024-01-02 09:00:00 x", true ; "at start")]
    #[test_case("2024-01-02 10:30:00 x", true ; "inside")]
    #[test_case("2024-01-02 12:00:00 x", true ; "at end")]
    #[test_case("2024-01-02 08:59:59 x", false ; "just before")]
    #[test_case("2024-01-02 12:00:01 x", false ; "just after")]
    fn window_is_inclusive(line: &str, expected: bool) {
        let filter = LineFilter::new(t("09:00:00"), t("12:00:00"), None);
        assert_eq!(filter.matches(line), expected);
    }

    #[test]
    fn untimestamped_line_only_for_whole_day() {
        let line = "\tat com.example.Service.run(Service.java:10)";
        assert!(whole_day(None).matches(line));

        let narrow = LineFilter::new(t("09:00:00"), TimeOfDay::end_of_day(), None);
        assert!(!narrow.matches(line));

        let early_end = LineFilter::new(TimeOfDay::start_of_day(), t("23:59:58"), None);
        assert!(!early_end.matches(line));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let filter = whole_day(Some("error"));
        assert!(filter.matches("2024-01-02 10:00:00 ERROR failed"));
        assert!(filter.matches("2024-01-02 10:00:00 Error failed"));
        assert!(!filter.matches("2024-01-02 10:00:00 INFO ok"));

        let upper = whole_day(Some("ERROR"));
        assert!(upper.matches("2024-01-02 10:00:00 error failed"));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert!(whole_day(Some("")).matches("anything"));
        assert!(whole_day(None).matches(""));
    }

    #[test]
    fn both_checks_must_pass() {
        let filter = LineFilter::new(t("09:00:00"), t("10:00:00"), Some("timeout"));
        assert!(filter.matches("2024-01-02 09:30:00 WARN timeout"));
        assert!(!filter.matches("2024-01-02 11:30:00 WARN timeout"));
        assert!(!filter.matches("2024-01-02 09:30:00 WARN slow"));
        assert!(!filter.matches("    timeout in stack trace"));
    }

    #[test]
    fn uses_first_timestamp_in_line() {
        let filter = LineFilter::new(t("09:00:00"), t("10:00:00"), None);
        assert!(filter.matches("2024-01-02 09:30:00 retry at 2024-01-02 11:00:00"));
        assert!(!filter.matches("2024-01-02 11:00:00 was due at 2024-01-02 09:30:00"));
    }

    #[test]
    fn from_criteria_copies_window_and_keyword() {
        let date = crate::types::LogicalDate::parse("2024-01-02").expect("date");
        let criteria = QueryCriteria::for_date(date)
            .with_keyword("Boom")
            .with_time_window(t("01:00:00"), t("02:00:00"));
        let filter = LineFilter::from_criteria(&criteria);
        assert!(filter.matches("2024-01-02 01:30:00 boom"));
        assert!(!filter.matches("2024-01-02 03:30:00 boom"));
    }

    proptest! {
        #[test]
        fn prop_keyword_match_ignores_case(word in "[a-zA-Z]{1,12}", pad in "[ 0-9]{0,5}") {
            let line = format!("{pad}{}{pad}", word.to_uppercase());
            prop_assert!(whole_day(Some(&word.to_lowercase())).matches(&line));
            prop_assert!(whole_day(Some(&word)).matches(&line));
        }
    }
}
