//! # logdesk-core
//!
//! Query engine over an application's rotated log files.
//!
//! An application writes `<prefix>.log` and an external rotator archives it
//! as `<prefix>.<YYYY-MM-DD>.<N>.log`. This crate provides:
//!
//! - [`LogEngine`] - Line queries, date listing and per-file time ranges
//! - [`EngineConfig`] - Log root, application, prefix and result caps
//! - [`QueryCriteria`] - Date, keyword, time window and optional file
//! - [`LogNaming`] - File name classification and reading order
//! - [`LineFilter`] - Time window and keyword predicate
//! - [`Clock`] - Source of "today" for the active file
//!
//! ## Example
//!
//! ```rust,no_run
//! use logdesk_core::{EngineConfig, LogEngine, LogicalDate, QueryCriteria, TimeOfDay};
//!
//! let engine = LogEngine::new(EngineConfig::new("/data/logs").with_app_name("task-center"));
//!
//! let criteria = QueryCriteria::for_date(LogicalDate::parse("2024-01-02")?)
//!     .with_keyword("timeout")
//!     .with_time_window(TimeOfDay::parse_start("09:00")?, TimeOfDay::parse_end("10:00")?);
//!
//! for line in engine.query_logs(&criteria)? {
//!     println!("{line}");
//! }
//! # Ok::<(), logdesk_core::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod decode;
pub mod engine;
pub mod error;
pub mod filter;
pub mod naming;
pub mod range;
pub mod resolver;
pub mod timestamp;
pub mod types;

// Re-export main types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DateMatch, EngineConfig, QueryLimits};
pub use engine::LogEngine;
pub use error::{LogError, Result};
pub use filter::LineFilter;
pub use naming::{FileKind, LogFile, LogNaming};
pub use resolver::DirectoryResolver;
pub use types::{FileTimeRange, LogicalDate, QueryCriteria, TimeOfDay, UNKNOWN_TIME};
