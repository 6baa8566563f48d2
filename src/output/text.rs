//! Human-readable text report.
//!
//! # Format
//!
//! ```text
//!
//! duplicate line: x
//!     a.txt:1
//!     a.txt:3
//!     b.txt:1
//!
//! check finished
//!     total line count: 4
//!     duplication line count: 3(1)
//! ```
//!
//! Locations are indented with a tab. A single space separates the
//! `duplicate line:` header from the content, which is written as raw bytes,
//! exactly as read. A content with leading whitespace therefore shows that
//! whitespace verbatim after the separator.

use std::io::{self, Write};

use yansi::Paint;

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// Text report formatter.
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
    summary: &'a ScanSummary,
}

impl<'a> TextOutput<'a> {
    /// Create a new text formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup], summary: &'a ScanSummary) -> Self {
        Self { groups, summary }
    }

    /// Write every duplicate group followed by the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for group in self.groups {
            write!(writer, "\n{} ", "duplicate line:".yellow().bold())?;
            writer.write_all(&group.content)?;
            writer.write_all(b"\n")?;
            for location in &group.locations {
                writeln!(writer, "\t{location}")?;
            }
        }

        writeln!(writer, "\n{}", "check finished".green().bold())?;
        writeln!(writer, "\ttotal line count: {}", self.summary.total_lines)?;
        writeln!(
            writer,
            "\tduplication line count: {}({})",
            self.summary.duplicate_lines, self.summary.duplicate_groups
        )?;
        writer.flush()
    }
}
