//! Data models for Diaguard diary processing
//!
//! This module contains the core data structure representing one diary entry
//! as reconstructed from a Diaguard backup.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

/// One diary entry aggregating a timestamp with the measurements, foods and
/// tags recorded alongside it
///
/// An entry is assembled by the backup parser from one `entry` record and the
/// run of sub-records that immediately follows it. Fields that were not
/// present in the backup keep their defaults: measurements that are genuinely
/// absent (`glucose`, `hba1c`) stay `None`, counted quantities default to
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// When the entry was recorded (naive local time)
    pub timestamp: NaiveDateTime,

    /// Blood glucose in mg/dL, if a bloodsugar measurement was present
    pub glucose: Option<i32>,

    /// Bolus insulin (IU)
    pub bolus_insulin: i32,

    /// Correction insulin (IU)
    pub correction_insulin: i32,

    /// Basal insulin (IU)
    pub basal_insulin: i32,

    /// Physical activity in minutes
    pub activity: i32,

    /// Recorded HbA1c lab value (percent), distinct from the estimate
    /// computed by the statistics engine
    pub hba1c: Option<f64>,

    /// Grams of carbohydrate per food eaten; the reserved key `"carbs"`
    /// holds manually entered amounts
    pub meal: BTreeMap<String, f64>,

    /// Entry tags; insertion order is kept for display, membership is what
    /// carries meaning
    pub tags: Vec<String>,

    /// Free-text comments
    pub comments: String,
}

impl Entry {
    /// Create an empty entry at the given timestamp
    pub fn new(timestamp: NaiveDateTime, comments: impl Into<String>) -> Self {
        Self {
            timestamp,
            glucose: None,
            bolus_insulin: 0,
            correction_insulin: 0,
            basal_insulin: 0,
            activity: 0,
            hba1c: None,
            meal: BTreeMap::new(),
            tags: Vec::new(),
            comments: comments.into(),
        }
    }

    /// Fast-acting insulin: bolus plus correction
    pub fn fast_insulin(&self) -> i32 {
        self.bolus_insulin + self.correction_insulin
    }

    /// Total insulin: fast-acting plus basal
    pub fn total_insulin(&self) -> i32 {
        self.fast_insulin() + self.basal_insulin
    }

    /// Total grams of carbohydrate across the meal
    pub fn carbs(&self) -> f64 {
        self.meal.values().sum()
    }

    /// Hour of the day the entry was recorded (0-23)
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Whether the entry carries any tags
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Whether the entry carries a non-empty comment
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    /// Whether the entry carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag, ignoring duplicates
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
    }

    /// Human-readable meal summary, e.g. `"apple, 28.0g; rice, 45.5g"`
    pub fn meal_description(&self) -> String {
        self.meal
            .iter()
            .map(|(food, grams)| format!("{}, {:.1}g", food, grams))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
