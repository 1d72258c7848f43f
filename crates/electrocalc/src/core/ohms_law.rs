//! Ohm's Law: V = I × R
//!
//! Exactly two of the three fields must be filled; the third is solved for.

use crate::core::field::parse_optional;
use crate::core::{FormulaError, FormulaResult, Quantity, Solution};

/// Solves for whichever of voltage, current or resistance is left blank
///
/// Any non-empty field is parsed first, so a non-numeric entry wins over a
/// wrong field count. Zero, one or three filled fields all share the same
/// message.
pub fn solve(voltage: &str, current: &str, resistance: &str) -> FormulaResult<Solution> {
    let v = parse_optional(voltage)?;
    let i = parse_optional(current)?;
    let r = parse_optional(resistance)?;

    match (v, i, r) {
        (Some(v), Some(i), None) => {
            if i == 0.0 {
                return Err(FormulaError::ZeroCurrent);
            }
            Solution::new(Quantity::Resistance, v / i)
        }
        (Some(v), None, Some(r)) => {
            if r == 0.0 {
                return Err(FormulaError::ZeroResistance);
            }
            Solution::new(Quantity::Current, v / r)
        }
        (None, Some(i), Some(r)) => Solution::new(Quantity::Voltage, i * r),
        _ => Err(FormulaError::ExactlyTwoRequired),
    }
}
