//! Duplicate grouping over a completed line index.
//!
//! # Overview
//!
//! Every line content with two or more occurrences becomes a
//! [`DuplicateGroup`]. Content seen once is dropped. Groups are emitted in a
//! deterministic order chosen by [`SortOrder`], since the index itself has no
//! stable iteration order.
//!
//! # Example
//!
//! ```
//! use dupline::cli::SortOrder;
//! use dupline::duplicates::group_duplicates;
//! use dupline::scanner::LineIndex;
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let mut index = LineIndex::new();
//! index.index_reader(Path::new("a.txt"), Cursor::new(b"x\ny\nx\n".to_vec())).unwrap();
//! index.index_reader(Path::new("b.txt"), Cursor::new(b"x\n".to_vec())).unwrap();
//!
//! let (groups, stats) = group_duplicates(&index, SortOrder::FirstSeen);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(stats.duplicate_lines, 3);
//! assert_eq!(stats.duplicate_groups, 1);
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::cli::SortOrder;
use crate::scanner::{LineIndex, Occurrence};

/// A resolved line location: file path and 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLocation {
    /// Path of the file as it was collected
    pub path: PathBuf,
    /// 1-based line number
    pub line: u64,
}

impl fmt::Display for LineLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

/// A line content that occurs more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Exact bytes of the line, without terminator
    pub content: Vec<u8>,
    /// Every location of the line, in scan order
    pub locations: Vec<LineLocation>,
}

impl DuplicateGroup {
    /// Number of occurrences in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if this group has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Line content as text, replacing invalid UTF-8.
    #[must_use]
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Counts accumulated while grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total lines in the index
    pub total_lines: u64,
    /// Sum of occurrence counts over all duplicate groups
    pub duplicate_lines: u64,
    /// Number of distinct duplicated contents
    pub duplicate_groups: u64,
}

/// Build the duplicate groups for a completed index.
///
/// Occurrence order inside a group is preserved. Group order follows
/// `order`: first occurrence position, or content bytes.
#[must_use]
pub fn group_duplicates(index: &LineIndex, order: SortOrder) -> (Vec<DuplicateGroup>, GroupingStats) {
    let mut stats = GroupingStats {
        total_lines: index.total_lines(),
        ..Default::default()
    };

    let mut duplicated: Vec<(&[u8], &[Occurrence])> = index
        .iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .collect();

    for (_, occurrences) in &duplicated {
        stats.duplicate_lines += occurrences.len() as u64;
        stats.duplicate_groups += 1;
    }

    match order {
        SortOrder::FirstSeen => duplicated.sort_by_key(|(_, occurrences)| occurrences[0]),
        SortOrder::Content => duplicated.sort_by(|a, b| a.0.cmp(b.0)),
    }

    let files = index.files();
    let groups = duplicated
        .into_iter()
        .map(|(content, occurrences)| DuplicateGroup {
            content: content.to_vec(),
            locations: occurrences
                .iter()
                .map(|occurrence| LineLocation {
                    path: files
                        .path(occurrence.file_id)
                        .map(PathBuf::from)
                        .unwrap_or_default(),
                    line: occurrence.line,
                })
                .collect(),
        })
        .collect();

    (groups, stats)
}
