//! Tests for the backup parser module

pub mod line_tests;
pub mod stats_tests;

use crate::app::services::backup_parser::{BackupParser, ParseResult};
use crate::config::ParserConfig;

/// Parse backup content with the lenient default configuration
pub fn parse(content: &str) -> ParseResult {
    BackupParser::new(ParserConfig::default())
        .parse_str(content)
        .expect("lenient parsing should not abort")
}

/// Parse backup content with the strict configuration
pub fn parse_strict(content: &str) -> crate::Result<ParseResult> {
    BackupParser::new(ParserConfig::new().with_strict()).parse_str(content)
}

/// A small but representative backup: food definitions, entries with
/// measurements, weighed foods, tags and comments, plus bookkeeping lines
/// of types the parser does not recognize
pub fn sample_backup() -> &'static str {
    "\
meta;\"1\";\"4.3.1\"
food;\"Apple\";\"\";\"fruit\";\"14\"
food;\"Rice\";\"\";\"grain\";\"28\"
entry;\"2024-01-01 08:00:00\";\"breakfast at home\"
measurement;\"bloodsugar\";\"95.7\"
measurement;\"insulin\";\"4\";\"1\";\"0\"
foodEaten;\"Apple\";\"200\"
entryTag;\"breakfast\"
entry;\"2024-01-01 13:00:00\";\"\"
measurement;\"bloodsugar\";\"150\"
measurement;\"meal\";\"60\"
entry;\"2024-01-02 20:30:00\";\"after run\"
measurement;\"insulin\";\"2\";\"0\";\"18\"
measurement;\"activity\";\"45.9\"
entryTag;\"sport\"
entryTag;\"dinner\"
foodEaten;\"Rice\";\"150\"
backupEnd;\"x\"
"
}
