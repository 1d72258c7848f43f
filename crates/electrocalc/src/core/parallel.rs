//! Resistors in parallel: 1 / Rtotal = Σ 1 / Rᵢ

use crate::core::field::parse_finite;
use crate::core::{FormulaError, FormulaResult, Quantity, Solution};

/// Separator between resistor values
pub const DELIMITER: char = ',';

/// Computes the combined resistance of a comma-separated list
///
/// A blank entry (for example a trailing comma while typing) counts as a
/// missing value. The count check runs before parsing, so a single value is
/// always [`FormulaError::TooFewResistors`] whatever it holds.
pub fn solve(list: &str) -> FormulaResult<Solution> {
    let tokens = tokenize(list);
    if tokens.len() < 2 || tokens.iter().any(|token| token.is_empty()) {
        return Err(FormulaError::TooFewResistors);
    }

    let values = tokens
        .iter()
        .map(|token| parse_finite(token).ok_or(FormulaError::MalformedList))
        .collect::<FormulaResult<Vec<f64>>>()?;

    if values.iter().any(|&r| r <= 0.0) {
        return Err(FormulaError::NonPositiveResistor);
    }

    let conductance: f64 = values.iter().map(|r| 1.0 / r).sum();
    Solution::new(Quantity::TotalResistance, 1.0 / conductance)
}

/// Splits on [`DELIMITER`] and returns every trimmed token, blanks included
#[must_use]
pub fn tokenize(list: &str) -> Vec<&str> {
    list.split(DELIMITER).map(str::trim).collect()
}
