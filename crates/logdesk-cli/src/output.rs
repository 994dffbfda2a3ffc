//! Output formatting for CLI commands.
//!
//! Table output is meant for people; JSON output wraps every result in the
//! envelope `{"success": ..., "data": ..., "message": ...}` so scripts can
//! tell failures apart from empty results.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Message carried by successful envelopes.
pub const SUCCESS_MESSAGE: &str = "success";

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a command result to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => write_json(writer, &Envelope::success(value))?,
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }

    /// Write a failure to the output.
    ///
    /// Only JSON output reports failures on the writer; table output leaves
    /// them to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_error<W: Write>(&self, writer: &mut W, error: &CliError) -> Result<(), CliError> {
        if self.is_json() {
            write_json(writer, &Envelope::<()>::failure(error.to_string()))?;
        }
        Ok(())
    }

    /// Write a command result to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
    writeln!(writer)?;
    Ok(())
}

/// Response wrapper used by JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<'a, T> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Command result, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    /// `"success"` or the failure description.
    pub message: String,
}

impl<'a, T> Envelope<'a, T> {
    /// Wraps a successful result.
    #[must_use]
    pub fn success(data: &'a T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Describes a failure.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value in human-readable form.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}
