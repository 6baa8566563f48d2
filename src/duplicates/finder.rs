//! Duplicate line finder orchestrating the scan pipeline.
//!
//! # Overview
//!
//! The pipeline is strictly linear:
//! 1. **Collect** - Resolve the candidate file list
//! 2. **Index** - Read every line of every file into a [`LineIndex`]
//! 3. **Group** - Keep line contents with 2+ occurrences
//!
//! Any I/O failure aborts the run; nothing is returned for a partial scan.
//!
//! # Example
//!
//! ```no_run
//! use dupline::duplicates::{DuplicateFinder, FinderConfig};
//! use dupline::scanner::ScanConfig;
//! use std::path::PathBuf;
//!
//! let scan = ScanConfig::new(vec![PathBuf::from("src")], Vec::new(), vec!["rs".to_string()]);
//! let finder = DuplicateFinder::new(FinderConfig::new(scan));
//! let (groups, summary) = finder.find_duplicates().unwrap();
//!
//! println!("{} duplicate groups in {} lines", groups.len(), summary.total_lines);
//! ```

use std::time::{Duration, Instant};

use super::groups::{group_duplicates, DuplicateGroup};
use crate::cli::SortOrder;
use crate::scanner::{collect_files, index_files, LineIndex, ScanConfig, ScanError};

/// Configuration for a duplicate line scan.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Which files to scan
    pub scan: ScanConfig,
    /// Report ordering
    pub order: SortOrder,
}

impl FinderConfig {
    /// Create a configuration with the default report order.
    #[must_use]
    pub fn new(scan: ScanConfig) -> Self {
        Self {
            scan,
            order: SortOrder::default(),
        }
    }

    /// Set the report order.
    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

/// Summary statistics from a duplicate line scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of files scanned
    pub total_files: usize,
    /// Total number of lines scanned
    pub total_lines: u64,
    /// Sum of occurrences over all duplicate groups
    pub duplicate_lines: u64,
    /// Number of distinct duplicated line contents
    pub duplicate_groups: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

/// Errors that can occur during duplicate finding.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// Collecting or indexing failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Duplicate finder that runs collect, index and group in sequence.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFinder {
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a new finder.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Build the line index for the configured files.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if a directory cannot be listed or a file
    /// cannot be opened or read.
    pub fn build_index(&self) -> Result<LineIndex, FinderError> {
        let files = collect_files(&self.config.scan)?;
        log::info!("{} files to check", files.len());
        Ok(index_files(&files)?)
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] on the first I/O failure.
    pub fn find_duplicates(&self) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start = Instant::now();
        let index = self.build_index()?;
        let (groups, stats) = group_duplicates(&index, self.config.order);

        let summary = ScanSummary {
            total_files: index.files().len(),
            total_lines: stats.total_lines,
            duplicate_lines: stats.duplicate_lines,
            duplicate_groups: stats.duplicate_groups,
            scan_duration: start.elapsed(),
        };
        log::debug!(
            "Scan finished in {:?}: {} groups over {} lines",
            summary.scan_duration,
            summary.duplicate_groups,
            summary.total_lines
        );
        Ok((groups, summary))
    }
}
