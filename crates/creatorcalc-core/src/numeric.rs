//! Parse-or-default helpers for form-shaped numeric input.
//!
//! Every engine input arrives from a form or a flag as text. Blank,
//! non-numeric, negative, or non-finite values collapse to zero instead of
//! failing, so the engines always receive a definite number.
//!
//! Two flavors exist. The prefix parsers ignore trailing junk after a numeric
//! prefix (`"6.5%"` parses as `6.5`); the strict parser requires the whole
//! trimmed string to be a number (`"1,000"` is zero).

use serde::{Deserialize, Serialize};

/// A form value that may arrive as a JSON/YAML string, number, or bool.
///
/// Clients post the same field both ways (`"75000"` and `75000`), so the
/// surfaces accept either and normalize through [`LenientField::as_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientField {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl LenientField {
    /// Returns the raw value rendered as text.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            LenientField::Text(s) => s.clone(),
            LenientField::Number(n) => n.to_string(),
            LenientField::Flag(b) => b.to_string(),
        }
    }
}

impl From<&str> for LenientField {
    fn from(value: &str) -> Self {
        LenientField::Text(value.to_string())
    }
}

impl From<f64> for LenientField {
    fn from(value: f64) -> Self {
        LenientField::Number(value)
    }
}

/// Returns the field's text when it was supplied and is not blank.
#[must_use]
pub fn supplied(field: Option<&LenientField>) -> Option<String> {
    field
        .map(LenientField::as_text)
        .filter(|s| !s.trim().is_empty())
}

/// Parses a real number from the leading numeric prefix of `raw`.
///
/// Returns `0.0` for blank, unparseable, negative, or non-finite input.
#[must_use]
pub fn parse_f64_or_zero(raw: &str) -> f64 {
    let prefix = float_prefix(raw.trim_start());
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parses `raw` only if the whole trimmed string is a number.
///
/// Returns `0.0` for blank, partially numeric, negative, or non-finite input.
#[must_use]
pub fn parse_f64_strict_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parses a non-negative integer from the leading digits of `raw`.
///
/// A fractional part is truncated (`"75000.9"` → `75000`). Returns `0` for
/// blank, unparseable, negative, or overflowing input.
#[must_use]
pub fn parse_u64_or_zero(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse::<u64>().unwrap_or(0)
}

/// Parses an optional field, treating absence the same as blank input.
#[must_use]
pub fn field_f64(field: Option<&LenientField>) -> f64 {
    field.map_or(0.0, |f| parse_f64_or_zero(&f.as_text()))
}

/// Parses a real number with [`parse_f64_or_zero`] and rounds to the nearest whole.
///
/// Accepts exponent and fractional forms (`"1e5"` → `100000`).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn field_rounded_u64(field: Option<&LenientField>) -> u64 {
    // Non-negative and finite; `as` saturates above u64::MAX.
    field_f64(field).round() as u64
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return "";
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}
