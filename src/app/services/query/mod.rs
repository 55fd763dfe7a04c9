//! Filtering and grouping over the parsed record set
//!
//! The parse result is an immutable [`RecordSet`]; all querying happens on
//! [`EntryView`] values borrowed from it. A view is a plain vector of entry
//! references, so every filter consumes the view and returns the narrowed
//! one, composing left-to-right without any shared mutable state:
//!
//! ```rust
//! use diaguard_processor::app::services::query::{NumericField, RecordSet};
//!
//! # fn example(record_set: &RecordSet) {
//! let recent_lows = record_set
//!     .view()
//!     .last_days(30)
//!     .range(NumericField::Glucose, 0.0, 70.0);
//! # let _ = recent_lows;
//! # }
//! ```
//!
//! "Resetting" a chain is simply taking a fresh `view()` from the record set.
//!
//! ## Components
//!
//! - [`fields`] - Numeric column selector for range filters
//! - [`view`] - The record set and the filter pipeline
//! - [`grouping`] - Hour / calendar-day / weekday partitions

pub mod fields;
pub mod grouping;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fields::NumericField;
pub use grouping::WEEKDAY_NAMES;
pub use view::{EntryView, RecordSet};
