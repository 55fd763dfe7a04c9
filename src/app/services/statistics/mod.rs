//! Clinical statistics over a filtered view
//!
//! Pure functions computing the report values. Missing glucose readings are
//! always excluded from aggregates, never imputed, and a statistic that has
//! no data to stand on is `None` rather than a fabricated zero. The only
//! exception is the fixed 24-element hourly series, whose contract is one
//! value per hour with zeros for empty hours.
//!
//! ## Components
//!
//! - [`aggregates`] - Mean and sample standard deviation
//! - [`engine`] - HbA1c estimate, time in range, per-group aggregates
//! - [`report`] - Report assembly for the renderers

pub mod aggregates;
pub mod engine;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::{DailyInsulinStats, GroupCountStats, HourlyGlucose, RangeCounts};
pub use report::{EntryRow, Report, ReportBuilder};
