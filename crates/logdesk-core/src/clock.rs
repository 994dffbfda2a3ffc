//! Source of "today" for active-file date attribution.
//!
//! The active log file has no date in its name; it is attributed to the
//! current local date. The [`Clock`] trait lets tests pin that date.

use chrono::Local;

use crate::types::LogicalDate;

/// Provides the current local date.
pub trait Clock: Send + Sync {
    /// Today's date in the local time zone.
    fn today(&self) -> LogicalDate;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> LogicalDate {
        LogicalDate::from_naive(Local::now().date_naive())
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone)]
pub struct FixedClock(pub LogicalDate);

impl Clock for FixedClock {
    fn today(&self) -> LogicalDate {
        self.0.clone()
    }
}
