//! Report assembly
//!
//! Pulls the statistics together into the value map handed to the renderers.
//! Every window is taken relative to the data's own most recent entry, so a
//! report over an old backup describes the end of that diary rather than an
//! empty present.

use serde::Serialize;
use tracing::debug;

use super::engine::{
    self, DailyInsulinStats, GroupCountStats, HourlyGlucose, RangeCounts,
};
use crate::app::models::Entry;
use crate::app::services::query::RecordSet;
use crate::config::ReportConfig;
use crate::constants::DISPLAY_DATE_FORMAT;

/// The report value map consumed by the renderers
///
/// Serializes to a flat key-to-value JSON object; absent statistics are
/// `null`, never a placeholder zero.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Estimated HbA1c over the HbA1c window, if any glucose was recorded
    pub hba1c: Option<f64>,

    /// Readings inside the target range over the statistics window
    pub time_in_range: usize,
    /// Readings below the target range
    pub time_below_range: usize,
    /// Readings at or above the target range
    pub time_above_range: usize,

    /// Entries in the statistics window
    pub entry_count: usize,
    /// Mean entries per day across the statistics window
    pub mean_entries_per_day: Option<f64>,
    /// Spread of entries per day across the statistics window
    pub std_entries_per_day: Option<f64>,

    /// Mean fast-acting insulin per day
    pub mean_fast_insulin_per_day: Option<f64>,
    /// Spread of fast-acting insulin per day
    pub std_fast_insulin_per_day: Option<f64>,

    /// Glucose mean/spread per hour of the day, always 24 rows
    pub glucose_by_hour: Vec<HourlyGlucose>,

    /// In-range reading counts per hour of the day, always 24 values
    pub time_in_range_by_hour: Vec<usize>,
    /// Below-range reading counts per hour of the day
    pub time_below_range_by_hour: Vec<usize>,
    /// Above-range reading counts per hour of the day
    pub time_above_range_by_hour: Vec<usize>,

    /// Recent entries for the human-facing listing, most recent first
    pub entries: Vec<EntryRow>,
}

impl Report {
    /// Time-in-range counts as one value
    pub fn range_counts(&self) -> RangeCounts {
        RangeCounts {
            below: self.time_below_range,
            in_range: self.time_in_range,
            above: self.time_above_range,
        }
    }
}

/// One row of the recent-entries listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRow {
    /// Formatted timestamp (`dd/mm/yy HH:MM`)
    pub timestamp: String,
    /// Glucose reading, if present
    pub glucose: Option<i32>,
    /// Bolus insulin
    pub bolus: i32,
    /// Correction insulin
    pub correction: i32,
    /// Basal insulin
    pub basal: i32,
    /// Meal summary, e.g. `"apple, 28.0g"`
    pub meal: String,
    /// Total carbohydrates in grams
    pub carbs: f64,
}

impl EntryRow {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            timestamp: entry.timestamp.format(DISPLAY_DATE_FORMAT).to_string(),
            glucose: entry.glucose,
            bolus: entry.bolus_insulin,
            correction: entry.correction_insulin,
            basal: entry.basal_insulin,
            meal: entry.meal_description(),
            carbs: entry.carbs(),
        }
    }
}

/// Assembles a [`Report`] from a record set
pub struct ReportBuilder<'a> {
    record_set: &'a RecordSet,
    config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder over a record set
    pub fn new(record_set: &'a RecordSet, config: ReportConfig) -> Self {
        Self { record_set, config }
    }

    /// Compute every report value
    pub fn build(&self) -> Report {
        let config = &self.config;

        let hba1c_view = self.record_set.view().last_days(config.hba1c_window_days);
        let hba1c = engine::estimated_hba1c(&hba1c_view);

        let stats_view = self.record_set.view().last_days(config.stats_window_days);
        debug!(
            "Statistics window holds {} of {} entries",
            stats_view.len(),
            self.record_set.len()
        );

        let range = engine::time_in_range(&stats_view, config.range_lower, config.range_upper);

        let by_day = stats_view.group_by_day();
        let GroupCountStats {
            total: entry_count,
            mean: mean_entries_per_day,
            std_dev: std_entries_per_day,
        } = engine::entry_count_stats(&by_day);

        let DailyInsulinStats {
            mean: mean_fast_insulin_per_day,
            std_dev: std_fast_insulin_per_day,
        } = engine::daily_fast_insulin(&by_day);

        let glucose_by_hour = engine::glucose_by_hour(&stats_view);
        let range_by_hour =
            engine::time_in_range_by_hour(&stats_view, config.range_lower, config.range_upper);

        let listing_view = self.record_set.view().last_days(config.listing_window_days);
        let entries: Vec<EntryRow> = listing_view
            .iter()
            .rev()
            .map(EntryRow::from_entry)
            .collect();

        Report {
            hba1c,
            time_in_range: range.in_range,
            time_below_range: range.below,
            time_above_range: range.above,
            entry_count,
            mean_entries_per_day,
            std_entries_per_day,
            mean_fast_insulin_per_day,
            std_fast_insulin_per_day,
            glucose_by_hour,
            time_in_range_by_hour: range_by_hour.iter().map(|counts| counts.in_range).collect(),
            time_below_range_by_hour: range_by_hour.iter().map(|counts| counts.below).collect(),
            time_above_range_by_hour: range_by_hour.iter().map(|counts| counts.above).collect(),
            entries,
        }
    }
}
