//! Logging infrastructure for dupline.
//!
//! This module provides logging using the `log` facade and `env_logger` backend.
//! Log levels are determined by (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `--verbose` (info/debug/trace)
//! 3. Default: warn level
//!
//! With the text report, records go to stdout so that `-v` progress messages
//! (`search: <path>`, `[skip] ...`) interleave with the report in the order
//! they happen. With JSON or CSV output they go to stderr, leaving stdout
//! machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use dupline::cli::OutputFormat;
//! use dupline::logging::init_logging;
//!
//! // Show progress messages (-v) alongside a text report
//! init_logging(1, false, OutputFormat::Text);
//!
//! log::info!("duplication check start");
//! ```

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::io::Write;

use crate::cli::OutputFormat;

/// Initialize the logging subsystem based on CLI verbosity flags.
///
/// This function should be called once at the start of the application,
/// before any logging calls are made.
///
/// # Arguments
///
/// * `verbose` - Verbosity count from CLI (0=warn, 1=info, 2=debug, 3+=trace)
/// * `quiet` - If true, only show errors (overridden by RUST_LOG)
/// * `output` - Report format, which decides the log stream (stdout for text, stderr otherwise)
///
/// # Panics
///
/// This function will panic if called more than once, as `env_logger`
/// can only be initialized once per process.
pub fn init_logging(verbose: u8, quiet: bool, output: OutputFormat) {
    let use_env = env::var("RUST_LOG").is_ok();

    let mut builder = Builder::new();
    builder.target(log_target(output));

    if use_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    configure_format(&mut builder, verbose);
    builder.init();

    log::debug!("Logging initialized at level: {}", current_level_name());
}

/// Log stream for a report format: stdout for text, stderr otherwise.
fn log_target(output: OutputFormat) -> Target {
    match output {
        OutputFormat::Text => Target::Stdout,
        OutputFormat::Json | OutputFormat::Csv => Target::Stderr,
    }
}

/// Determine the log level from CLI flags.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configure the log format.
///
/// Progress messages at `-v` are printed bare; debug and trace add the
/// level and module path.
fn configure_format(builder: &mut Builder, verbose: u8) {
    builder.format(move |buf, record| {
        let level = record.level();
        if verbose >= 2 {
            let level_style = buf.default_level_style(level);
            writeln!(
                buf,
                "{level_style}{:<5}{level_style:#} [{}] {}",
                level,
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        } else if level == log::Level::Info {
            writeln!(buf, "{}", record.args())
        } else {
            let level_style = buf.default_level_style(level);
            writeln!(buf, "{level_style}{:<5}{level_style:#} {}", level, record.args())
        }
    });
}

/// Get the current log level as a string.
pub fn current_level_name() -> &'static str {
    match log::max_level() {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}
