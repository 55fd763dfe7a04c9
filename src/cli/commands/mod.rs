//! Command implementations for the Diaguard processor CLI
//!
//! Each command is implemented in its own module; shared helpers for
//! logging, input reading and progress reporting live in [`shared`].

pub mod foods;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the Diaguard processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `report`: parse a backup and render the statistics report
/// - `foods`: parse a backup and list its food catalog
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Foods(foods_args) => foods::run_foods(foods_args),
    }
}
