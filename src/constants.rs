//! Application constants for the Diaguard processor
//!
//! This module contains the backup format tags, date patterns, and clinical
//! defaults used throughout the application.

// =============================================================================
// Backup Format
// =============================================================================

/// Top-level and entry-scoped record type tags in a Diaguard backup
pub mod record_types {
    /// Food catalog definition (name first, carbs per 100g last)
    pub const FOOD: &str = "food";

    /// Start of a diary entry (date string, comments)
    pub const ENTRY: &str = "entry";

    /// Measurement attached to the preceding entry
    pub const MEASUREMENT: &str = "measurement";

    /// Weighed food attached to the preceding entry
    pub const FOOD_EATEN: &str = "foodEaten";

    /// Tag attached to the preceding entry
    pub const ENTRY_TAG: &str = "entryTag";
}

/// Measurement categories, keyed by the first field of a measurement record
pub mod measurement_categories {
    /// Blood glucose in mg/dL
    pub const BLOODSUGAR: &str = "bloodsugar";

    /// Bolus, correction and basal insulin (IU)
    pub const INSULIN: &str = "insulin";

    /// Manually entered carbohydrates in grams
    pub const MEAL: &str = "meal";

    /// Physical activity in minutes
    pub const ACTIVITY: &str = "activity";

    /// Recorded HbA1c lab value (percent)
    pub const HBA1C: &str = "hba1c";
}

/// Reserved meal key for manually entered carbohydrate amounts
pub const MANUAL_CARBS_KEY: &str = "carbs";

/// Entry date format written by current exporters
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Entry date format without seconds, found in older backups
pub const ENTRY_DATE_FORMAT_SHORT: &str = "%Y-%m-%d %H:%M";

/// Timestamp format used in report listings
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%y %H:%M";

// =============================================================================
// Clinical Defaults
// =============================================================================

/// Offset term of the estimated-HbA1c formula (Nathan et al. 2008)
pub const HBA1C_MEAN_OFFSET: f64 = 46.7;

/// Scale term of the estimated-HbA1c formula (Nathan et al. 2008)
pub const HBA1C_MEAN_SCALE: f64 = 28.7;

/// Lower bound of the default glucose target range (mg/dL, inclusive)
pub const DEFAULT_RANGE_LOWER: i32 = 70;

/// Upper bound of the default glucose target range (mg/dL, exclusive)
pub const DEFAULT_RANGE_UPPER: i32 = 180;

/// Window of glucose readings used for the HbA1c estimate, in days
pub const DEFAULT_HBA1C_WINDOW_DAYS: i64 = 90;

/// Window used for the summary statistics, in days
pub const DEFAULT_STATS_WINDOW_DAYS: i64 = 15;

/// Window used for the recent-entries listing, in days
pub const DEFAULT_LISTING_WINDOW_DAYS: i64 = 5;

/// Number of hour buckets in fixed-length hourly series
pub const HOURS_PER_DAY: usize = 24;
