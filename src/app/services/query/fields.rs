//! Numeric column selector for range filters

use crate::app::models::Entry;

/// Numeric columns of an entry usable in range filters
///
/// Derived columns (fast and total insulin, carbohydrate total) are computed
/// on access, so filters over them see exactly the values the statistics
/// engine sees. Optional measurements yield `None` when absent, and a row
/// with a missing value never matches a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Glucose,
    BolusInsulin,
    CorrectionInsulin,
    BasalInsulin,
    FastInsulin,
    TotalInsulin,
    Activity,
    Carbs,
    Hba1c,
}

impl NumericField {
    /// Value of this column for an entry, if defined
    pub fn value(&self, entry: &Entry) -> Option<f64> {
        match self {
            Self::Glucose => entry.glucose.map(f64::from),
            Self::BolusInsulin => Some(f64::from(entry.bolus_insulin)),
            Self::CorrectionInsulin => Some(f64::from(entry.correction_insulin)),
            Self::BasalInsulin => Some(f64::from(entry.basal_insulin)),
            Self::FastInsulin => Some(f64::from(entry.fast_insulin())),
            Self::TotalInsulin => Some(f64::from(entry.total_insulin())),
            Self::Activity => Some(f64::from(entry.activity)),
            Self::Carbs => Some(entry.carbs()),
            Self::Hba1c => entry.hba1c,
        }
    }
}
