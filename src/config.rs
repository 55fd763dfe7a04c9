//! Configuration for parsing and report generation
//!
//! Provides the parser failure policy and the clinical windows/ranges used
//! when assembling a report.

use crate::constants::{
    DEFAULT_HBA1C_WINDOW_DAYS, DEFAULT_LISTING_WINDOW_DAYS, DEFAULT_RANGE_LOWER,
    DEFAULT_RANGE_UPPER, DEFAULT_STATS_WINDOW_DAYS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Failure policy for the backup parser
///
/// In the default lenient mode a malformed entry is skipped as a whole and its
/// error recorded in the parse statistics; strict mode aborts on the first
/// malformed entry instead.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Abort on the first malformed entry instead of skipping it
    pub strict: bool,
}

impl ParserConfig {
    /// Create a lenient parser configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict mode
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

/// Windows and target range used when assembling a report
///
/// All windows are measured backwards from the most recent entry in the data,
/// not from the wall clock, so reports over old backups stay meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Days of glucose readings feeding the HbA1c estimate
    pub hba1c_window_days: i64,

    /// Days covered by the summary statistics
    pub stats_window_days: i64,

    /// Days covered by the recent-entries listing
    pub listing_window_days: i64,

    /// Lower bound of the glucose target range (mg/dL, inclusive)
    pub range_lower: i32,

    /// Upper bound of the glucose target range (mg/dL, exclusive)
    pub range_upper: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            hba1c_window_days: DEFAULT_HBA1C_WINDOW_DAYS,
            stats_window_days: DEFAULT_STATS_WINDOW_DAYS,
            listing_window_days: DEFAULT_LISTING_WINDOW_DAYS,
            range_lower: DEFAULT_RANGE_LOWER,
            range_upper: DEFAULT_RANGE_UPPER,
        }
    }
}

impl ReportConfig {
    /// Create a report configuration with the clinical defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HbA1c window
    pub fn with_hba1c_window_days(mut self, days: i64) -> Self {
        self.hba1c_window_days = days;
        self
    }

    /// Set the statistics window
    pub fn with_stats_window_days(mut self, days: i64) -> Self {
        self.stats_window_days = days;
        self
    }

    /// Set the listing window
    pub fn with_listing_window_days(mut self, days: i64) -> Self {
        self.listing_window_days = days;
        self
    }

    /// Set the glucose target range
    pub fn with_target_range(mut self, lower: i32, upper: i32) -> Self {
        self.range_lower = lower;
        self.range_upper = upper;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.hba1c_window_days <= 0 {
            return Err(Error::configuration(format!(
                "HbA1c window must be positive, got {}",
                self.hba1c_window_days
            )));
        }

        if self.stats_window_days <= 0 {
            return Err(Error::configuration(format!(
                "statistics window must be positive, got {}",
                self.stats_window_days
            )));
        }

        if self.listing_window_days <= 0 {
            return Err(Error::configuration(format!(
                "listing window must be positive, got {}",
                self.listing_window_days
            )));
        }

        if self.range_lower >= self.range_upper {
            return Err(Error::configuration(format!(
                "target range lower bound {} must be below upper bound {}",
                self.range_lower, self.range_upper
            )));
        }

        Ok(())
    }
}
