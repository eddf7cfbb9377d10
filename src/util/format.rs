//! Lenient numeric parsing and locale-style amount formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::config::FormatConfig;

/// Fraction digits kept when formatting, matching browser number formatting.
const MAX_FRACTION_DIGITS: usize = 3;

/// Parse a numeric string the way form inputs and data attributes are read:
/// surrounding whitespace is ignored and empty, malformed, or non-finite
/// input becomes `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format `value` with grouped thousands and up to three fraction digits.
///
/// `3999.0` → `"3,999"`, `1234.5` → `"1,234.5"` with the default separators.
/// Digits come from the decimal rendering of the float, so large magnitudes
/// keep every integer digit without an integer cast.
pub fn format_amount(value: f64, format: &FormatConfig) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.prec$}", value.abs(), prec = MAX_FRACTION_DIGITS);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = fraction.is_empty() && whole.bytes().all(|b| b == b'0');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(whole, &format.group_separator));
    if !fraction.is_empty() {
        out.push_str(&format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Format an amount followed by the currency marker, e.g. `"2,500 ₽"`.
pub fn format_price(value: f64, format: &FormatConfig) -> String {
    format!("{} {}", format_amount(value, format), format.currency)
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
