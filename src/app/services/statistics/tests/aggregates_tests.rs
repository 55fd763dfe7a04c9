//! Tests for the numeric aggregate helpers

use crate::app::services::statistics::aggregates::{mean, mean_and_std_dev, sample_std_dev};

#[test]
fn test_mean_of_empty_slice_is_undefined() {
    assert_eq!(mean(&[]), None);
}

#[test]
fn test_mean_of_values() {
    assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
    assert_eq!(mean(&[42.0]), Some(42.0));
}

#[test]
fn test_std_dev_needs_two_values() {
    // a single observation has no spread to estimate; this must stay
    // distinguishable from a spread of zero
    assert_eq!(sample_std_dev(&[]), None);
    assert_eq!(sample_std_dev(&[5.0]), None);
}

#[test]
fn test_std_dev_uses_sample_formula() {
    // variance of [2, 4] with N-1 denominator is 2
    assert_eq!(sample_std_dev(&[2.0, 4.0]), Some(2.0_f64.sqrt()));
}

#[test]
fn test_std_dev_of_constant_values_is_zero() {
    assert_eq!(sample_std_dev(&[10.0, 10.0, 10.0]), Some(0.0));
}

#[test]
fn test_mean_and_std_dev_together() {
    let (mean, std_dev) = mean_and_std_dev(&[1.0, 2.0, 3.0]);

    assert_eq!(mean, Some(2.0));
    assert_eq!(std_dev, Some(1.0));
}

#[test]
fn test_mean_and_std_dev_of_single_value() {
    let (mean, std_dev) = mean_and_std_dev(&[7.5]);

    assert_eq!(mean, Some(7.5));
    assert_eq!(std_dev, None);
}
