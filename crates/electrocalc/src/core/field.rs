//! Numeric field parsing shared by all solvers

use std::borrow::Cow;

use crate::core::{FormulaError, FormulaResult};

/// Parses a field that may be left blank
///
/// Only the empty string counts as blank. Anything else, including
/// whitespace-only text, must parse as a finite number.
pub fn parse_optional(text: &str) -> FormulaResult<Option<f64>> {
    if text.is_empty() {
        return Ok(None);
    }
    parse_required(text).map(Some)
}

/// Parses a field that must hold a number
pub fn parse_required(text: &str) -> FormulaResult<f64> {
    parse_finite(text).ok_or(FormulaError::NonNumeric)
}

/// Trims and parses `text`, rejecting `inf` and `NaN` spellings
///
/// Underscores are accepted as digit separators (`1_000`).
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    strip_digit_separators(text.trim())?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Drops each `_` that sits between two ASCII digits
///
/// Returns `None` for any other underscore.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(Cow::Owned(out))
}
