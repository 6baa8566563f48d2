//! Scanner module for file collection and line indexing.
//!
//! This module provides functionality for:
//! - Resolving the candidate file list from directories and explicit files
//! - Extension filtering
//! - Reading every line of every candidate into a [`LineIndex`]
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`collector`]: Candidate file discovery (non-recursive)
//! - [`indexer`]: Line-by-line reading and grouping by exact content
//!
//! # Example
//!
//! ```no_run
//! use dupline::scanner::{collect_files, index_files, ScanConfig};
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(vec![PathBuf::from("src")], Vec::new(), vec!["rs".to_string()]);
//! let files = collect_files(&config).unwrap();
//! let index = index_files(&files).unwrap();
//! println!("{} lines scanned", index.total_lines());
//! ```

pub mod collector;
pub mod indexer;

use std::path::PathBuf;

// Re-export main types
pub use collector::{collect_files, matches_extension, normalize_extension};
pub use indexer::{index_files, FileId, FileTable, LineIndex, Occurrence, READ_BUFFER_SIZE};

/// Configuration for resolving the candidate file list.
///
/// Directories are listed non-recursively, explicit files are taken as-is,
/// and extension filters (if any) are applied to the combined list.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Directories to scan (direct entries only).
    pub dirs: Vec<PathBuf>,

    /// Explicit files to scan.
    pub files: Vec<PathBuf>,

    /// Extension filters, each normalized to start with `.`.
    pub extensions: Vec<String>,
}

impl ScanConfig {
    /// Create a new configuration, normalizing the extension filters.
    ///
    /// # Arguments
    ///
    /// * `dirs` - Directories to list
    /// * `files` - Explicit files
    /// * `extensions` - Extension filters, with or without a leading `.`
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>, files: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            dirs,
            files,
            extensions: extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
        }
    }

    /// Whether there is nothing to scan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

/// Errors that can occur while collecting or indexing files.
///
/// Every variant is fatal to the run.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A configured directory does not exist.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Permission was denied when listing a directory or opening a file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A configured directory could not be listed.
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory being listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A candidate file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// File being opened
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read error occurred in the middle of a file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Map a directory listing error to the matching variant.
    pub(crate) fn from_read_dir(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::DirectoryNotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::ReadDir { path, source },
        }
    }

    /// Map a file open error to the matching variant.
    pub(crate) fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Open { path, source },
        }
    }
}
