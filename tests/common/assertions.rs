//! Assertion utilities for testing.
//!
//! Helpers for comparing the temperature figures the API returns.

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a summary record satisfies `TMIN <= TAVG <= TMAX`.
///
/// # Panics
///
/// Panics if any field is missing or not a number, or if the order is violated.
pub fn assert_summary_ordered(summary: &Value) {
    let field = |name: &str| {
        summary[name]
            .as_f64()
            .unwrap_or_else(|| panic!("{} is not a number in {}", name, summary))
    };
    let (tmin, tavg, tmax) = (field("TMIN"), field("TAVG"), field("TMAX"));

    assert!(
        tmin <= tavg && tavg <= tmax,
        "Summary out of order: TMIN = {}, TAVG = {}, TMAX = {}",
        tmin,
        tavg,
        tmax
    );
}

/// Assert that every record's `"date"` is on or after `cutoff`.
pub fn assert_dates_from(records: &[Value], cutoff: &str) {
    for record in records {
        let date = record["date"]
            .as_str()
            .unwrap_or_else(|| panic!("record without date: {}", record));
        assert!(date >= cutoff, "date {} precedes cutoff {}", date, cutoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(74.5, 74.5000000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_summary_ordered() {
        assert_summary_ordered(&json!({"TMIN": 58.0, "TAVG": 74.6, "TMAX": 87.0}));
        assert_summary_ordered(&json!({"TMIN": 70.0, "TAVG": 70.0, "TMAX": 70.0}));
    }
}
