//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use core::fmt::{Result as FmtResult, Write};

/// Serialize a number as shortest round-tripping decimal text without an exponent.
///
/// Spec: <https://drafts.csswg.org/cssom/#serialize-a-css-component-value>
///
/// # Errors
/// Propagates errors from the destination writer.
pub fn write_number<W: Write>(value: f64, dest: &mut W) -> FmtResult {
    // `-0 + 0` is `+0`, so negative zero serializes as "0".
    let normalized = value + 0.0;
    write!(dest, "{normalized}")
}

/// Convenience wrapper over [`write_number`] returning an owned string.
pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    if write_number(value, &mut out).is_err() {
        out.clear();
    }
    out
}

/// Parse the longest numeric prefix of `text`, ignoring leading ASCII whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Trailing text after the prefix is ignored, so `"12px"` yields `12.0`.
/// Returns `None` when no digit is found.
pub fn parse_number_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(|character: char| character.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut has_digits = false;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        has_digits = true;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut fraction_end = end + 1;
        let mut fraction_digits = false;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
            fraction_digits = true;
        }
        if fraction_digits || has_digits {
            end = fraction_end;
            has_digits = has_digits || fraction_digits;
        }
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }
    trimmed.get(..end)?.parse::<f64>().ok()
}
