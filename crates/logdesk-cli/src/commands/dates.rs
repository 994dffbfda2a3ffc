//! Dates command implementation.

use std::io::Write;

use logdesk_core::{LogEngine, LogicalDate};
use serde::Serialize;

use crate::cli::AppArgs;
use crate::commands::engine_for_app;
use crate::error::CliError;
use crate::output::{OutputFormat, TableDisplay};

/// Handler for the dates command.
pub struct DatesCommand<'a> {
    engine: &'a LogEngine,
}

impl<'a> DatesCommand<'a> {
    /// Creates a new dates command handler.
    #[must_use]
    pub const fn new(engine: &'a LogEngine) -> Self {
        Self { engine }
    }

    /// Executes the dates command.
    ///
    /// # Errors
    ///
    /// Returns error if the log directory is unusable.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        format: &OutputFormat,
        target: &AppArgs,
    ) -> Result<(), CliError> {
        let engine = engine_for_app(self.engine, target);
        let dates = engine.list_available_dates()?;
        format.write(out, &DateList(dates))
    }
}

/// Dates with logs, ascending.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DateList(pub Vec<LogicalDate>);

impl TableDisplay for DateList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        for date in &self.0 {
            writeln!(writer, "{date}")?;
        }
        Ok(())
    }
}
