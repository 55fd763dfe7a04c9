//! Numeric aggregate helpers

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (N-1 denominator)
///
/// A sample of fewer than two values has no spread to estimate and yields
/// `None`, which callers must keep distinct from zero.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

/// Mean and sample standard deviation in one pass over the slice
pub fn mean_and_std_dev(values: &[f64]) -> (Option<f64>, Option<f64>) {
    (mean(values), sample_std_dev(values))
}
