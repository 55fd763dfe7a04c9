//! Foods command implementation
//!
//! Parses a backup and lists the food catalog it defines, for checking what
//! a `foodEaten` record can reference.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{read_input, setup_logging};
use crate::app::services::backup_parser::BackupParser;
use crate::cli::args::FoodsArgs;
use crate::config::ParserConfig;
use crate::Result;

/// Foods command runner
pub fn run_foods(args: FoodsArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let content = read_input(args.input.as_deref())?;
    let parser = BackupParser::new(ParserConfig::default());
    let result = parser.parse_str(&content)?;

    info!("{}", result.stats.summary());

    if result.catalog.is_empty() {
        println!("No foods defined in this backup.");
        return Ok(());
    }

    println!("{}", "Food catalog".bold());
    println!("{:<30} {:>12}", "Name", "Carbs/100g");
    for (name, carbs_per_100g) in result.catalog.iter() {
        println!("{:<30} {:>12.1}", name, carbs_per_100g);
    }
    println!();
    println!(
        "{} foods, referenced by {} entries",
        result.catalog.len(),
        result.entry_count()
    );

    Ok(())
}
