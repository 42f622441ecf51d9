//! Cell parsers. Every data-request cell arrives as a trimmed string; these
//! turn it into the scalar the column declares.

use crate::error::FieldError;

pub use crate::process::date_parser::{parse_timestamp, Timestamp};

/// Text cells pass through untouched.
pub fn parse_text(s: &str) -> String {
    s.to_string()
}

/// Base-10 signed integer. Decimals are rejected, not truncated.
pub fn parse_int(s: &str) -> Result<i64, FieldError> {
    s.parse::<i64>()
        .map_err(|_| FieldError::InvalidIntegerFormat {
            value: s.to_string(),
        })
}

/// Float with an optional trailing `%`, rounded half away from zero to two
/// decimal places.
pub fn parse_float(s: &str) -> Result<f64, FieldError> {
    let invalid = || FieldError::InvalidFloatFormat {
        value: s.to_string(),
    };
    let cleaned = s.strip_suffix('%').unwrap_or(s);
    let v: f64 = cleaned.parse().map_err(|_| invalid())?;
    // scaling by 100 can overflow values near f64::MAX
    let rounded = round2(v);
    if !v.is_finite() || !rounded.is_finite() {
        return Err(invalid());
    }
    Ok(rounded)
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
