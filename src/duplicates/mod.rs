//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Grouping indexed lines by content (see [`groups`])
//! - Running the collect/index/group pipeline (see [`finder`])

pub mod finder;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, FinderError, ScanSummary};
pub use groups::{group_duplicates, DuplicateGroup, GroupingStats, LineLocation};
