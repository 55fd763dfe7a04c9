//! Command-line argument definitions for the Diaguard processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{
    DEFAULT_HBA1C_WINDOW_DAYS, DEFAULT_LISTING_WINDOW_DAYS, DEFAULT_RANGE_LOWER,
    DEFAULT_RANGE_UPPER, DEFAULT_STATS_WINDOW_DAYS,
};
use crate::{Error, ParserConfig, ReportConfig, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Diaguard diary processor
///
/// Turns Diaguard diabetes diary backups into clinical statistics reports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "diaguard-processor",
    version,
    about = "Turn Diaguard diary backups into clinical statistics reports",
    long_about = "Parses the semicolon-delimited backup exported by the Diaguard diabetes \
                  diary app and computes a clinical report: estimated HbA1c, time in range, \
                  per-day entry and insulin statistics, and a glucose-by-hour profile, \
                  rendered as human-readable text or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the Diaguard processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compute and render a statistics report from a backup
    Report(ReportArgs),
    /// List the food catalog defined in a backup
    Foods(FoodsArgs),
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input backup file
    ///
    /// The Diaguard CSV backup to analyze. Reads from stdin if not specified,
    /// so backups can be piped in.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input backup file (stdin if omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Output file for the rendered report
    ///
    /// Writes to stdout if not specified.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the report (stdout if omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Report output format"
    )]
    pub format: OutputFormat,

    /// Abort on the first malformed entry
    ///
    /// By default a malformed entry is skipped and reported in the parse
    /// statistics; this flag turns any parse error into a hard failure.
    #[arg(long = "strict", help = "Abort on the first malformed entry")]
    pub strict: bool,

    /// Days of glucose readings feeding the HbA1c estimate
    #[arg(
        long = "hba1c-window",
        value_name = "DAYS",
        default_value_t = DEFAULT_HBA1C_WINDOW_DAYS,
        help = "Days of readings feeding the HbA1c estimate"
    )]
    pub hba1c_window: i64,

    /// Days covered by the summary statistics
    #[arg(
        long = "stats-window",
        value_name = "DAYS",
        default_value_t = DEFAULT_STATS_WINDOW_DAYS,
        help = "Days covered by the summary statistics"
    )]
    pub stats_window: i64,

    /// Days covered by the recent-entries listing
    #[arg(
        long = "listing-window",
        value_name = "DAYS",
        default_value_t = DEFAULT_LISTING_WINDOW_DAYS,
        help = "Days covered by the recent-entries listing"
    )]
    pub listing_window: i64,

    /// Lower bound of the glucose target range (mg/dL, inclusive)
    #[arg(
        long = "range-lower",
        value_name = "MGDL",
        default_value_t = DEFAULT_RANGE_LOWER,
        help = "Lower bound of the glucose target range"
    )]
    pub range_lower: i32,

    /// Upper bound of the glucose target range (mg/dL, exclusive)
    #[arg(
        long = "range-upper",
        value_name = "MGDL",
        default_value_t = DEFAULT_RANGE_UPPER,
        help = "Upper bound of the glucose target range"
    )]
    pub range_upper: i32,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the foods command
#[derive(Debug, Clone, Parser)]
pub struct FoodsArgs {
    /// Input backup file (stdin if omitted)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input backup file (stdin if omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,
    /// JSON report for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        self.report_config().validate()
    }

    /// Report configuration assembled from the arguments
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_hba1c_window_days(self.hba1c_window)
            .with_stats_window_days(self.stats_window)
            .with_listing_window_days(self.listing_window)
            .with_target_range(self.range_lower, self.range_upper)
    }

    /// Parser configuration assembled from the arguments
    pub fn parser_config(&self) -> ParserConfig {
        if self.strict {
            ParserConfig::new().with_strict()
        } else {
            ParserConfig::new()
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_to_level(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode, file input)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.input.is_some()
    }
}

impl FoodsArgs {
    /// Validate the foods command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "input file does not exist: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_to_level(self.verbose)
    }
}

fn verbosity_to_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
