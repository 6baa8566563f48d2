//! dupline - Duplicate Line Finder
//!
//! A Rust CLI application that scans a set of files line by line and reports
//! every exact line of text occurring more than once, with the file and line
//! number of each occurrence.
//!
//! The run is a strict linear pipeline:
//! [`scanner::collect_files`] → [`scanner::index_files`] →
//! [`duplicates::group_duplicates`] → [`output`].

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::CommandFactory;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{CsvOutput, JsonOutput, TextOutput};
use crate::scanner::ScanConfig;

/// Run the application for parsed command-line arguments.
///
/// Logging must already be initialized. The report is fully rendered before
/// anything is written, so a failed run prints no partial report. A reader
/// that closes stdout early ends the run successfully.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed, a file cannot be opened
/// or read, or the report cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    if cli.no_color || !io::stdout().is_terminal() {
        yansi::disable();
    }

    let config = Config::load();
    let order = config.resolve_sort(cli.sort);

    if cli.save_config {
        let updated = Config { sort: Some(order) };
        updated.save().context("Failed to save configuration")?;
        log::info!("saved defaults: sort: {:?}", order);
    }

    let scan = ScanConfig::new(cli.dirs, cli.files, cli.extensions);
    if scan.is_empty() {
        if !cli.save_config {
            Cli::command().print_help()?;
        }
        return Ok(ExitCode::Success);
    }

    log::info!("duplication check start");
    log::info!(
        "search target dir: {:?}, file: {:?}, ext: {:?}",
        scan.dirs,
        scan.files,
        scan.extensions
    );

    let finder = DuplicateFinder::new(FinderConfig::new(scan).with_order(order));
    let (groups, summary) = finder.find_duplicates()?;

    let mut report = Vec::new();
    match cli.output {
        OutputFormat::Text => TextOutput::new(&groups, &summary).write_to(&mut report)?,
        OutputFormat::Json => JsonOutput::new(&groups, &summary).write_to(&mut report)?,
        OutputFormat::Csv => CsvOutput::new(&groups).write_to(&mut report)?,
    }
    output::write_report(&mut io::stdout().lock(), &report).context("Failed to write report")?;

    Ok(ExitCode::Success)
}
