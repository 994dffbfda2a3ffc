//! Files command implementation.
//!
//! Lists the files of a date with the span of timestamps each one covers.

use std::io::Write;

use logdesk_core::{FileTimeRange, LogEngine, LogicalDate};
use serde::Serialize;

use crate::cli::AppArgs;
use crate::commands::engine_for_app;
use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

/// Handler for the files command.
pub struct FilesCommand<'a> {
    engine: &'a LogEngine,
}

impl<'a> FilesCommand<'a> {
    /// Creates a new files command handler.
    #[must_use]
    pub const fn new(engine: &'a LogEngine) -> Self {
        Self { engine }
    }

    /// Executes the files command.
    ///
    /// # Errors
    ///
    /// Returns error if the date is malformed or the log directory is
    /// unusable.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        date: &str,
        target: &AppArgs,
    ) -> Result<(), CliError> {
        let date = LogicalDate::parse(date.trim())?;
        let engine = engine_for_app(self.engine, target);
        let ranges = engine.list_files_for_date(&date)?;
        format.write(out, &FileList(ranges))
    }
}

/// Files of one date, in reading order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FileList(pub Vec<FileTimeRange>);

impl TableDisplay for FileList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.0.is_empty() {
            writeln!(writer, "No log files for this date")?;
            return Ok(());
        }

        let width = self
            .0
            .iter()
            .map(|f| f.file_name.len())
            .max()
            .unwrap_or(0)
            .max("FILE".len());

        // Header
        writeln!(writer, "{:<width$}  {:<19}  {:<19}", "FILE", "EARLIEST", "LATEST")?;
        writeln!(writer, "{}", "─".repeat(width + 42))?;

        // Rows
        for file in &self.0 {
            writeln!(
                writer,
                "{:<width$}  {:<19}  {:<19}",
                file.file_name,
                file.earliest_or_unknown(),
                file.latest_or_unknown()
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} file(s)", self.0.len())?;
        Ok(())
    }
}
