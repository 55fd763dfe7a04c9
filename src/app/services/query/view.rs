//! The immutable record set and the filter pipeline over it

use chrono::{Duration, NaiveDateTime};

use super::fields::NumericField;
use crate::app::models::Entry;

/// The immutable result of parsing one backup, sorted ascending by timestamp
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    entries: Vec<Entry>,
}

impl RecordSet {
    /// Create a record set, sorting the entries ascending by timestamp
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        Self { entries }
    }

    /// All entries in timestamp order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A fresh view over all entries
    pub fn view(&self) -> EntryView<'_> {
        EntryView {
            entries: self.entries.iter().collect(),
        }
    }
}

/// A filtered subset of a record set, preserving its order
///
/// Filters consume the view and return the narrowed one, so chains read
/// left-to-right and never touch the underlying record set. Taking a new
/// [`RecordSet::view`] is the reset operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView<'a> {
    entries: Vec<&'a Entry>,
}

impl<'a> EntryView<'a> {
    /// Build a view directly from entry references (grouping helper)
    pub(crate) fn from_refs(entries: Vec<&'a Entry>) -> Self {
        Self { entries }
    }

    /// Entries in this view, in record set order
    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    /// Iterate over the entries in this view
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a Entry> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries in this view
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this view is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All defined glucose values in this view, in order
    pub fn glucose_values(&self) -> Vec<f64> {
        self.iter()
            .filter_map(|entry| entry.glucose)
            .map(f64::from)
            .collect()
    }

    /// Retain entries whose `field` value lies in the half-open `[low, high)`
    ///
    /// Entries without a defined value for the field never match. An empty
    /// interval (`low >= high`) yields an empty view rather than an error.
    pub fn range(self, field: NumericField, low: f64, high: f64) -> Self {
        self.retain(|entry| {
            field
                .value(entry)
                .is_some_and(|value| value >= low && value < high)
        })
    }

    /// Retain entries that carry tags, or only untagged ones when inverted
    pub fn has_tags(self, invert: bool) -> Self {
        self.retain(|entry| entry.has_tags() != invert)
    }

    /// Retain entries carrying all of the given tags, or any when `match_any`
    pub fn with_tags(self, tags: &[&str], match_any: bool) -> Self {
        self.retain(|entry| {
            if match_any {
                tags.iter().any(|tag| entry.has_tag(tag))
            } else {
                tags.iter().all(|tag| entry.has_tag(tag))
            }
        })
    }

    /// Retain entries with non-empty comments
    pub fn has_comments(self) -> Self {
        self.retain(Entry::has_comments)
    }

    /// Retain entries with timestamp in the half-open `[low, high)`
    pub fn date_range(self, low: NaiveDateTime, high: NaiveDateTime) -> Self {
        self.retain(|entry| entry.timestamp >= low && entry.timestamp < high)
    }

    /// Retain entries from the most recent `days` days of this view
    ///
    /// The reference point is the view's own maximum timestamp, not the wall
    /// clock, so the operation is deterministic and works on historical
    /// backups. A window of zero or negative width contains nothing.
    pub fn last_days(self, days: i64) -> Self {
        let Some(latest) = self.entries.iter().map(|entry| entry.timestamp).max() else {
            return self;
        };

        let cutoff = latest - Duration::days(days);
        self.retain(|entry| entry.timestamp > cutoff)
    }

    fn retain(mut self, predicate: impl Fn(&Entry) -> bool) -> Self {
        self.entries.retain(|&entry| predicate(entry));
        self
    }
}
