//! Tests for the query layer


use chrono::NaiveDate;

use crate::app::models::Entry;
use crate::app::services::query::RecordSet;

/// Entry on 2024-03-`day` at `hour`:`minute`
pub fn entry_at(day: u32, hour: u32, minute: u32) -> Entry {
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    Entry::new(timestamp, "")
}

/// Six entries over three days (2024-03-01 Fri, 03-02 Sat, 03-04 Mon) with a
/// spread of glucose values, insulin doses, tags and comments
pub fn sample_record_set() -> RecordSet {
    let mut e1 = entry_at(1, 7, 0);
    e1.glucose = Some(60);
    e1.bolus_insulin = 2;
    e1.add_tag("breakfast");

    let mut e2 = entry_at(1, 12, 30);
    e2.glucose = Some(110);
    e2.bolus_insulin = 4;
    e2.correction_insulin = 1;
    e2.comments = "lunch out".to_string();

    let mut e3 = entry_at(1, 22, 0);
    e3.glucose = Some(210);
    e3.correction_insulin = 2;
    e3.add_tag("late");
    e3.add_tag("snack");

    let mut e4 = entry_at(2, 7, 15);
    e4.bolus_insulin = 3;
    e4.meal.insert("carbs".to_string(), 45.0);
    e4.add_tag("breakfast");

    let mut e5 = entry_at(2, 19, 0);
    e5.glucose = Some(95);
    e5.basal_insulin = 20;
    e5.comments = "tired".to_string();

    let mut e6 = entry_at(4, 7, 45);
    e6.glucose = Some(130);
    e6.bolus_insulin = 5;
    e6.add_tag("breakfast");
    e6.add_tag("sport");

    RecordSet::new(vec![e1, e2, e3, e4, e5, e6])
}
