//! Number parsing for noisy annotation text.

use std::sync::LazyLock;

use regex::Regex;

static RANGE_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:-|–|\bto\b|\bor\b)\s*").expect("valid range separator"));

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a float after dropping thousands separators and any character that
/// cannot be part of an unsigned decimal.
pub fn to_float(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a number or a two-sided range such as `"12 to 34"` or
/// `"3.1 - 4.5"`. A range whose sides are equal collapses to one value.
pub fn split_range(raw: &str) -> Vec<f64> {
    let mut values: Vec<f64> = RANGE_SEP.split(raw).filter_map(to_float).collect();
    values.truncate(2);
    if values.len() == 2 && values[0] == values[1] {
        values.pop();
    }
    values
}
