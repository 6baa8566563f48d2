//! Output formatters for duplicate line results.
//!
//! This module provides different renderings of a completed scan:
//! - Text for humans (the default)
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! # Example
//!
//! ```no_run
//! use dupline::duplicates::{DuplicateFinder, FinderConfig};
//! use dupline::output::TextOutput;
//! use dupline::scanner::ScanConfig;
//! use std::path::PathBuf;
//!
//! let scan = ScanConfig::new(vec![PathBuf::from(".")], Vec::new(), Vec::new());
//! let (groups, summary) = DuplicateFinder::new(FinderConfig::new(scan))
//!     .find_duplicates()
//!     .unwrap();
//!
//! TextOutput::new(&groups, &summary)
//!     .write_to(&mut std::io::stdout().lock())
//!     .unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod text;

use std::io::{self, ErrorKind, Write};

// Re-export main types
pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::text::TextOutput;

/// Write a rendered report and flush it.
///
/// A reader that goes away early (`dupline -d . | head`) ends the output
/// normally instead of failing the run.
///
/// # Errors
///
/// Returns any write error other than [`ErrorKind::BrokenPipe`].
pub fn write_report<W: Write>(writer: &mut W, report: &[u8]) -> io::Result<()> {
    match writer.write_all(report).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("Report reader closed early: {}", e);
            Ok(())
        }
        result => result,
    }
}
