//! Line indexing.
//!
//! # Overview
//!
//! Reads every candidate file sequentially and groups lines by their exact
//! byte content. Each line is recorded as an [`Occurrence`] (file id and
//! 1-based line number) under its content key in the [`LineIndex`].
//!
//! - Files get a [`FileId`] equal to their position in the candidate list.
//! - Lines end at `\n`; the terminator (and a preceding `\r`) is stripped.
//! - A final line without a terminator still counts.
//! - Blank lines are indexed like any other content.
//! - No normalization is applied: trailing whitespace is significant.
//!
//! Reads go through a [`READ_BUFFER_SIZE`]-byte buffer; lines longer than the
//! buffer are reassembled in full.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::ScanError;

/// Size of the read buffer used for each file.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Identifier of a scanned file: its position in the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub usize);

/// One physical location of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurrence {
    /// File the line was read from
    pub file_id: FileId,
    /// 1-based line number within that file
    pub line: u64,
}

impl Occurrence {
    /// Create a new occurrence.
    #[must_use]
    pub fn new(file_id: FileId, line: u64) -> Self {
        Self { file_id, line }
    }
}

/// Table mapping file ids back to their paths.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    paths: Vec<PathBuf>,
}

impl FileTable {
    /// Register a path and return its id.
    pub fn push(&mut self, path: PathBuf) -> FileId {
        self.paths.push(path);
        FileId(self.paths.len() - 1)
    }

    /// Path for a file id, if registered.
    #[must_use]
    pub fn path(&self, id: FileId) -> Option<&Path> {
        self.paths.get(id.0).map(PathBuf::as_path)
    }

    /// Number of registered files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if no files are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Mapping from exact line content to every place it occurs.
///
/// Occurrence lists are in scan order and never empty.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    lines: HashMap<Vec<u8>, Vec<Occurrence>>,
    files: FileTable,
    total_lines: u64,
}

impl LineIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one line.
    pub fn record(&mut self, content: &[u8], occurrence: Occurrence) {
        if let Some(occurrences) = self.lines.get_mut(content) {
            occurrences.push(occurrence);
        } else {
            self.lines.insert(content.to_vec(), vec![occurrence]);
        }
        self.total_lines += 1;
    }

    /// Register a file and index every line produced by `reader`.
    ///
    /// `path` is only used for the file table and error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] on any read failure other than end of stream.
    pub fn index_reader<R: BufRead>(&mut self, path: &Path, mut reader: R) -> Result<FileId, ScanError> {
        let file_id = self.files.push(path.to_path_buf());
        let mut buf = Vec::new();
        let mut line_number = 0u64;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ScanError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            strip_terminator(&mut buf);
            line_number += 1;
            self.record(&buf, Occurrence::new(file_id, line_number));
        }

        log::debug!("{}: {} lines", path.display(), line_number);
        Ok(file_id)
    }

    /// Open a file and index its lines.
    ///
    /// The file handle is released before this returns, on success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the file cannot be opened or read.
    pub fn index_file(&mut self, path: &Path) -> Result<FileId, ScanError> {
        log::info!("search: {}", path.display());
        let file = File::open(path).map_err(|e| ScanError::from_open(path.to_path_buf(), e))?;
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        self.index_reader(path, reader)
    }

    /// Total number of lines recorded, duplicated or not.
    #[must_use]
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    /// Table of indexed files.
    #[must_use]
    pub fn files(&self) -> &FileTable {
        &self.files
    }

    /// Occurrences of a given line content.
    #[must_use]
    pub fn get(&self, content: &[u8]) -> Option<&[Occurrence]> {
        self.lines.get(content).map(Vec::as_slice)
    }

    /// Iterate over every (content, occurrences) entry in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[Occurrence])> {
        self.lines
            .iter()
            .map(|(content, occurrences)| (content.as_slice(), occurrences.as_slice()))
    }
}

/// Remove a trailing `\n` or `\r\n`.
fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

/// Index every file in order.
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered; the run is aborted and no
/// partial index is returned.
pub fn index_files(files: &[PathBuf]) -> Result<LineIndex, ScanError> {
    let mut index = LineIndex::new();
    for path in files {
        index.index_file(path)?;
    }
    Ok(index)
}
