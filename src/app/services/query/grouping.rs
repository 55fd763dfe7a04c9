//! Partitioning a view by hour, calendar day, or weekday
//!
//! Each grouping returns an ordered map from group key to the matching
//! sub-view; only keys with at least one entry appear, and every sub-view
//! keeps the parent view's ordering. Fixed-length series (one value per hour
//! of the day) are the statistics engine's concern, not the grouping's.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::view::EntryView;
use crate::app::models::Entry;

/// Weekday display names, indexed by days from Monday
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl<'a> EntryView<'a> {
    /// Partition by hour of the day (0-23)
    pub fn group_by_hour(&self) -> BTreeMap<u32, EntryView<'a>> {
        self.partition(|entry| entry.hour())
    }

    /// Partition by calendar day
    pub fn group_by_day(&self) -> BTreeMap<NaiveDate, EntryView<'a>> {
        self.partition(|entry| entry.timestamp.date())
    }

    /// Partition by weekday, keyed by days from Monday (0-6)
    ///
    /// Display names for the keys are in [`WEEKDAY_NAMES`].
    pub fn group_by_weekday(&self) -> BTreeMap<u32, EntryView<'a>> {
        self.partition(|entry| entry.timestamp.weekday().num_days_from_monday())
    }

    fn partition<K: Ord>(&self, key: impl Fn(&Entry) -> K) -> BTreeMap<K, EntryView<'a>> {
        let mut groups: BTreeMap<K, Vec<&'a Entry>> = BTreeMap::new();
        for entry in self.iter() {
            groups.entry(key(entry)).or_default().push(entry);
        }

        groups
            .into_iter()
            .map(|(key, entries)| (key, EntryView::from_refs(entries)))
            .collect()
    }
}
