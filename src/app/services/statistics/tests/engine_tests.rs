//! Tests for the statistics functions

use super::{entry_at, glucose_entry, insulin_entry, record_set};
use crate::app::services::statistics::engine::{
    daily_fast_insulin, entry_count_stats, estimated_hba1c, glucose_by_hour, time_in_range,
    time_in_range_by_hour,
};

#[test]
fn test_estimated_hba1c_formula() {
    let set = record_set(vec![glucose_entry(1, 8, 160)]);
    let view = set.view();

    assert_eq!(estimated_hba1c(&view), Some((160.0 + 46.7) / 28.7));
}

#[test]
fn test_estimated_hba1c_averages_readings() {
    let set = record_set(vec![
        glucose_entry(1, 8, 100),
        glucose_entry(1, 12, 140),
        entry_at(1, 18), // no reading, must not drag the mean down
    ]);
    let view = set.view();

    assert_eq!(estimated_hba1c(&view), Some((120.0 + 46.7) / 28.7));
}

#[test]
fn test_estimated_hba1c_without_readings_is_undefined() {
    let empty = record_set(Vec::new());
    assert_eq!(estimated_hba1c(&empty.view()), None);

    let no_glucose = record_set(vec![entry_at(1, 8), entry_at(1, 12)]);
    assert_eq!(estimated_hba1c(&no_glucose.view()), None);
}

#[test]
fn test_time_in_range_boundaries() {
    // 70 sits on the inclusive lower bound, 190 above the exclusive upper
    let set = record_set(vec![glucose_entry(1, 8, 70), glucose_entry(1, 12, 190)]);
    let counts = time_in_range(&set.view(), 70, 180);

    assert_eq!(counts.below, 0);
    assert_eq!(counts.in_range, 1);
    assert_eq!(counts.above, 1);
}

#[test]
fn test_time_in_range_counts() {
    let set = record_set(vec![
        glucose_entry(1, 8, 200),
        glucose_entry(1, 9, 100),
        glucose_entry(1, 10, 110),
        glucose_entry(1, 11, 40),
        glucose_entry(1, 12, 50),
        glucose_entry(1, 13, 60),
        entry_at(1, 14),
    ]);
    let counts = time_in_range(&set.view(), 70, 180);

    assert_eq!(counts.in_range, 2);
    assert_eq!(counts.above, 1);
    assert_eq!(counts.below, 3);
    assert_eq!(counts.total(), 6);
}

#[test]
fn test_time_in_range_percentages() {
    let set = record_set(vec![
        glucose_entry(1, 8, 60),
        glucose_entry(1, 9, 100),
        glucose_entry(1, 10, 120),
        glucose_entry(1, 11, 200),
    ]);
    let counts = time_in_range(&set.view(), 70, 180);

    let (below, in_range, above) = counts.percentages().unwrap();
    assert_eq!(below, 25.0);
    assert_eq!(in_range, 50.0);
    assert_eq!(above, 25.0);
}

#[test]
fn test_time_in_range_percentages_undefined_without_readings() {
    let set = record_set(vec![entry_at(1, 8)]);
    let counts = time_in_range(&set.view(), 70, 180);

    assert_eq!(counts.total(), 0);
    assert_eq!(counts.percentages(), None);
}

#[test]
fn test_entry_count_stats_across_days() {
    let set = record_set(vec![
        entry_at(1, 8),
        entry_at(1, 12),
        entry_at(1, 19),
        entry_at(2, 8),
        entry_at(2, 19),
        entry_at(3, 8),
    ]);
    let by_day = set.view().group_by_day();
    let stats = entry_count_stats(&by_day);

    assert_eq!(stats.total, 6);
    assert_eq!(stats.mean, Some(2.0));
    assert_eq!(stats.std_dev, Some(1.0));
}

#[test]
fn test_entry_count_stats_single_group_has_no_spread() {
    let set = record_set(vec![entry_at(1, 8), entry_at(1, 12)]);
    let by_day = set.view().group_by_day();
    let stats = entry_count_stats(&by_day);

    assert_eq!(stats.total, 2);
    assert_eq!(stats.mean, Some(2.0));
    assert_eq!(stats.std_dev, None);
}

#[test]
fn test_entry_count_stats_without_groups() {
    let set = record_set(Vec::new());
    let by_day = set.view().group_by_day();
    let stats = entry_count_stats(&by_day);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.mean, None);
    assert_eq!(stats.std_dev, None);
}

#[test]
fn test_daily_fast_insulin_sums_per_day() {
    let set = record_set(vec![
        insulin_entry(1, 8, 4, 1, 0),  // fast 5
        insulin_entry(1, 19, 3, 0, 20), // fast 3, basal excluded
        insulin_entry(2, 8, 6, 0, 0),  // fast 6
    ]);
    let by_day = set.view().group_by_day();
    let stats = daily_fast_insulin(&by_day);

    // day sums are 8 and 6
    assert_eq!(stats.mean, Some(7.0));
    assert_eq!(stats.std_dev, Some(2.0_f64.sqrt()));
}

#[test]
fn test_daily_fast_insulin_without_days() {
    let set = record_set(Vec::new());
    let stats = daily_fast_insulin(&set.view().group_by_day());

    assert_eq!(stats.mean, None);
    assert_eq!(stats.std_dev, None);
}

#[test]
fn test_glucose_by_hour_has_fixed_length() {
    let set = record_set(Vec::new());
    let series = glucose_by_hour(&set.view());

    assert_eq!(series.len(), 24);
    for (hour, row) in series.iter().enumerate() {
        assert_eq!(row.hour, hour as u32);
        assert_eq!(row.mean, 0.0);
        assert_eq!(row.std_dev, 0.0);
    }
}

#[test]
fn test_glucose_by_hour_values() {
    let set = record_set(vec![
        glucose_entry(1, 8, 100),
        glucose_entry(2, 8, 120),
        glucose_entry(1, 14, 90),
        entry_at(1, 20), // no reading, hour 20 stays at zero
    ]);
    let series = glucose_by_hour(&set.view());

    assert_eq!(series[8].mean, 110.0);
    assert_eq!(series[8].std_dev, 200.0_f64.sqrt());
    // a single reading has no spread; the fixed series reports zero
    assert_eq!(series[14].mean, 90.0);
    assert_eq!(series[14].std_dev, 0.0);
    assert_eq!(series[20].mean, 0.0);
}

#[test]
fn test_time_in_range_by_hour() {
    let set = record_set(vec![
        glucose_entry(1, 8, 60),
        glucose_entry(2, 8, 100),
        glucose_entry(1, 20, 200),
    ]);
    let series = time_in_range_by_hour(&set.view(), 70, 180);

    assert_eq!(series.len(), 24);
    assert_eq!(series[8].below, 1);
    assert_eq!(series[8].in_range, 1);
    assert_eq!(series[20].above, 1);

    let total: usize = series.iter().map(|counts| counts.total()).sum();
    assert_eq!(total, 3);
}
