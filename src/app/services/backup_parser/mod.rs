//! Parser for Diaguard backup files
//!
//! This module reconstructs diary entries from the line-oriented,
//! semicolon-delimited Diaguard backup format. An entry spans several
//! physically adjacent lines: one `entry` record followed by a run of
//! `measurement`, `foodEaten` and `entryTag` sub-records, with `food`
//! catalog definitions interleaved between entries.
//!
//! ## Architecture
//!
//! The parser is organized into small components:
//! - [`line`] - Physical line normalization (tag + field values)
//! - [`food_catalog`] - Food name to carbohydrate-ratio catalog
//! - [`parser`] - Forward-pass record loop with the sub-record scan
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use diaguard_processor::app::services::backup_parser::BackupParser;
//! use diaguard_processor::config::ParserConfig;
//!
//! # fn example() -> diaguard_processor::Result<()> {
//! let parser = BackupParser::new(ParserConfig::default());
//! let result = parser.parse_str("entry;\"2024-01-01 08:00:00\";\"\"\n")?;
//!
//! println!(
//!     "Parsed {} entries from {} lines",
//!     result.stats.entries_parsed, result.stats.total_lines
//! );
//! # Ok(())
//! # }
//! ```

pub mod food_catalog;
pub mod line;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use food_catalog::FoodCatalog;
pub use line::RawRecord;
pub use parser::BackupParser;
pub use stats::{ParseResult, ParseStats};
