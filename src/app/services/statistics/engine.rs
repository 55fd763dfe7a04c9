//! Statistics functions over views and their groups

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregates::{mean, mean_and_std_dev, sample_std_dev};
use crate::app::services::query::EntryView;
use crate::constants::{HBA1C_MEAN_OFFSET, HBA1C_MEAN_SCALE, HOURS_PER_DAY};

/// Estimated HbA1c from the mean glucose of a view
///
/// Uses the linear estimate of Nathan et al. 2008, `(mean + 46.7) / 28.7`.
/// The caller is expected to pre-filter the view to the clinically relevant
/// window (90 days). `None` when the view holds no glucose readings.
pub fn estimated_hba1c(view: &EntryView) -> Option<f64> {
    mean(&view.glucose_values()).map(|mean| (mean + HBA1C_MEAN_OFFSET) / HBA1C_MEAN_SCALE)
}

/// Glucose reading counts below, inside and above a target range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeCounts {
    /// Readings strictly below the lower bound
    pub below: usize,
    /// Readings in the half-open `[lower, upper)` band
    pub in_range: usize,
    /// Readings at or above the upper bound
    pub above: usize,
}

impl RangeCounts {
    /// Total number of counted readings
    pub fn total(&self) -> usize {
        self.below + self.in_range + self.above
    }

    /// Percentages (below, in range, above), `None` without readings
    pub fn percentages(&self) -> Option<(f64, f64, f64)> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        let pct = |count: usize| count as f64 * 100.0 / total as f64;
        Some((pct(self.below), pct(self.in_range), pct(self.above)))
    }
}

/// Count defined glucose readings of a view against a target range
pub fn time_in_range(view: &EntryView, lower: i32, upper: i32) -> RangeCounts {
    let mut counts = RangeCounts::default();

    for glucose in view.iter().filter_map(|entry| entry.glucose) {
        if glucose < lower {
            counts.below += 1;
        } else if glucose < upper {
            counts.in_range += 1;
        } else {
            counts.above += 1;
        }
    }

    counts
}

/// Entry counts across a grouped view
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCountStats {
    /// Total entries across all groups
    pub total: usize,
    /// Mean entries per group, `None` without groups
    pub mean: Option<f64>,
    /// Sample standard deviation of per-group counts, `None` below two groups
    pub std_dev: Option<f64>,
}

/// Per-group entry counts and their spread (used for entries per day)
pub fn entry_count_stats<K: Ord>(groups: &BTreeMap<K, EntryView<'_>>) -> GroupCountStats {
    let counts: Vec<f64> = groups.values().map(|group| group.len() as f64).collect();
    let (mean, std_dev) = mean_and_std_dev(&counts);

    GroupCountStats {
        total: counts.iter().sum::<f64>() as usize,
        mean,
        std_dev,
    }
}

/// Daily fast-acting insulin use
#[derive(Debug, Clone, PartialEq)]
pub struct DailyInsulinStats {
    /// Mean of the per-day fast insulin sums, `None` without days
    pub mean: Option<f64>,
    /// Sample standard deviation of the per-day sums, `None` below two days
    pub std_dev: Option<f64>,
}

/// Sum fast insulin per day, then aggregate across days
pub fn daily_fast_insulin(by_day: &BTreeMap<NaiveDate, EntryView<'_>>) -> DailyInsulinStats {
    let daily_sums: Vec<f64> = by_day
        .values()
        .map(|day| {
            day.iter()
                .map(|entry| f64::from(entry.fast_insulin()))
                .sum()
        })
        .collect();

    let (mean, std_dev) = mean_and_std_dev(&daily_sums);
    DailyInsulinStats { mean, std_dev }
}

/// Mean and spread of glucose for one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyGlucose {
    /// Hour of the day (0-23)
    pub hour: u32,
    /// Mean glucose of the hour, 0.0 without readings
    pub mean: f64,
    /// Sample standard deviation of the hour, 0.0 without spread
    pub std_dev: f64,
}

/// Mean and standard deviation of glucose for each hour of the day
///
/// Always returns exactly 24 rows, hours 0 through 23 in order; the report
/// consumers rely on the fixed length, so hours without readings carry zeros
/// rather than being omitted.
pub fn glucose_by_hour(view: &EntryView) -> Vec<HourlyGlucose> {
    let by_hour = view.group_by_hour();

    (0..HOURS_PER_DAY as u32)
        .map(|hour| {
            let values = by_hour
                .get(&hour)
                .map(|group| group.glucose_values())
                .unwrap_or_default();

            HourlyGlucose {
                hour,
                mean: mean(&values).unwrap_or(0.0),
                std_dev: sample_std_dev(&values).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Time-in-range counts for each hour of the day
///
/// Fixed 24-element series like [`glucose_by_hour`]; hours without readings
/// carry zero counts.
pub fn time_in_range_by_hour(view: &EntryView, lower: i32, upper: i32) -> Vec<RangeCounts> {
    let by_hour = view.group_by_hour();

    (0..HOURS_PER_DAY as u32)
        .map(|hour| {
            by_hour
                .get(&hour)
                .map(|group| time_in_range(group, lower, upper))
                .unwrap_or_default()
        })
        .collect()
}
