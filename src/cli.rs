//! Command-line interface definitions for dupline.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Check every .go file directly inside two directories
//! dupline -d ./pkg -d ./cmd --ext go
//!
//! # Check explicit files, with progress messages
//! dupline -v -f a.txt -f b.txt
//!
//! # JSON report sorted by line content
//! dupline -d src --output json --sort content
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Duplicate line finder for quick code-duplication audits.
///
/// Reports every exact line of text that occurs more than once across the
/// scanned files, with the file and line number of each occurrence.
#[derive(Debug, Parser)]
#[command(name = "dupline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to check, non-recursively (can be specified multiple times)
    #[arg(short, long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// File to check (can be specified multiple times)
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Only check files with this extension, with or without the leading dot
    /// (can be specified multiple times)
    #[arg(long = "extension", visible_alias = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Increase verbosity level (-v for progress, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Order of duplicate groups in the report
    #[arg(long, value_enum, value_name = "ORDER")]
    pub sort: Option<SortOrder>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Save the given --sort value as the default report order for later runs
    #[arg(long)]
    pub save_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets, one row per occurrence
    Csv,
}

/// Ordering of duplicate groups in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// By position of the first occurrence (file order, then line)
    #[default]
    FirstSeen,
    /// By line content, bytewise
    Content,
}
