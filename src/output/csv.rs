//! CSV output formatter for duplicate line results.
//!
//! One row is generated for each occurrence of a duplicated line.
//!
//! # Columns
//!
//! - `group_id`: Numeric ID identifying the duplicate group (1-based)
//! - `line`: The duplicated line content
//! - `path`: Path of the file containing the occurrence
//! - `line_number`: 1-based line number of the occurrence

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::DuplicateGroup;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    group_id: usize,
    line: &'a str,
    path: String,
    line_number: u64,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    groups: &'a [DuplicateGroup],
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup]) -> Self {
        Self { groups }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for (idx, group) in self.groups.iter().enumerate() {
            let content = group.content_lossy();
            for location in &group.locations {
                csv_writer.serialize(CsvRow {
                    group_id: idx + 1,
                    line: &content,
                    path: location.path.to_string_lossy().into_owned(),
                    line_number: location.line,
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
