//! JSON output formatter for duplicate line results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "line": "x",
//!       "count": 3,
//!       "locations": [
//!         { "path": "a.txt", "line": 1 },
//!         { "path": "a.txt", "line": 3 },
//!         { "path": "b.txt", "line": 1 }
//!       ]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 2,
//!     "total_lines": 4,
//!     "duplicate_lines": 3,
//!     "duplicate_groups": 1,
//!     "scan_duration_ms": 0
//!   }
//! }
//! ```
//!
//! Line content that is not valid UTF-8 is converted lossily.

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// A single location in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonLocation {
    /// File path as collected
    pub path: String,
    /// 1-based line number
    pub line: u64,
}

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Line content
    pub line: String,
    /// Number of occurrences
    pub count: usize,
    /// Every occurrence, in scan order
    pub locations: Vec<JsonLocation>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            line: group.content_lossy(),
            count: group.len(),
            locations: group
                .locations
                .iter()
                .map(|location| JsonLocation {
                    path: location.path.to_string_lossy().into_owned(),
                    line: location.line,
                })
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Number of files scanned
    pub total_files: usize,
    /// Total number of lines scanned
    pub total_lines: u64,
    /// Sum of occurrences over all duplicate groups
    pub duplicate_lines: u64,
    /// Number of distinct duplicated lines
    pub duplicate_groups: u64,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
}

impl JsonSummary {
    /// Create a JSON summary from a ScanSummary.
    #[must_use]
    pub fn from_scan_summary(summary: &ScanSummary) -> Self {
        Self {
            total_files: summary.total_files,
            total_lines: summary.total_lines,
            duplicate_lines: summary.duplicate_lines,
            duplicate_groups: summary.duplicate_groups,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from duplicate groups and a summary.
    ///
    /// # Example
    ///
    /// ```
    /// use dupline::duplicates::ScanSummary;
    /// use dupline::output::json::JsonOutput;
    ///
    /// let output = JsonOutput::new(&[], &ScanSummary::default());
    /// assert!(output.duplicates.is_empty());
    /// ```
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &ScanSummary) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary::from_scan_summary(summary),
        }
    }

    /// Write pretty-printed JSON to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), JsonOutputError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
