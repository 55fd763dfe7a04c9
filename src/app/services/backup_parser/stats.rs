//! Parsing statistics and result structures for the backup parser

use super::food_catalog::FoodCatalog;
use crate::app::services::query::RecordSet;

/// Statistics for one backup parsing run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    /// Total number of physical lines in the backup
    pub total_lines: usize,
    /// Number of entries successfully reconstructed
    pub entries_parsed: usize,
    /// Number of malformed entries skipped (lenient mode only)
    pub entries_skipped: usize,
    /// Number of foods registered in the catalog
    pub foods_registered: usize,
    /// Number of unrecognized top-level lines skipped
    pub lines_skipped: usize,
    /// Error messages for skipped entries, with line positions
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty parsing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of entry records that parsed successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.entries_parsed + self.entries_skipped;
        if attempted == 0 {
            100.0
        } else {
            (self.entries_parsed as f64 / attempted as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% of entries kept)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Parse summary: {} lines -> {} entries ({:.1}% success) | \
             Foods: {} | Skipped entries: {} | Skipped lines: {}",
            self.total_lines,
            self.entries_parsed,
            self.success_rate(),
            self.foods_registered,
            self.entries_skipped,
            self.lines_skipped
        )
    }
}

/// Result of parsing one backup
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed record set, sorted ascending by timestamp
    pub record_set: RecordSet,
    /// The food catalog assembled during the scan
    pub catalog: FoodCatalog,
    /// Parsing statistics and error information
    pub stats: ParseStats,
}

impl ParseResult {
    /// Number of parsed entries
    pub fn entry_count(&self) -> usize {
        self.record_set.len()
    }

    /// Check if parsing was successful based on statistics
    pub fn is_successful(&self) -> bool {
        self.stats.is_successful()
    }
}
