//! Tests for the statistics engine

pub mod aggregates_tests;
pub mod engine_tests;

use chrono::NaiveDate;

use crate::app::models::Entry;
use crate::app::services::query::RecordSet;

/// Entry on 2024-06-`day` at `hour`:00
pub fn entry_at(day: u32, hour: u32) -> Entry {
    let timestamp = NaiveDate::from_ymd_opt(2024, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    Entry::new(timestamp, "")
}

/// Entry with a glucose reading
pub fn glucose_entry(day: u32, hour: u32, glucose: i32) -> Entry {
    let mut entry = entry_at(day, hour);
    entry.glucose = Some(glucose);
    entry
}

/// Entry with an insulin measurement
pub fn insulin_entry(day: u32, hour: u32, bolus: i32, correction: i32, basal: i32) -> Entry {
    let mut entry = entry_at(day, hour);
    entry.bolus_insulin = bolus;
    entry.correction_insulin = correction;
    entry.basal_insulin = basal;
    entry
}

/// Record set from a list of entries
pub fn record_set(entries: Vec<Entry>) -> RecordSet {
    RecordSet::new(entries)
}
