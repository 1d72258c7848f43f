//! Two-resistor voltage divider: Vout = Vin × R2 / (R1 + R2)

use crate::core::field::parse_required;
use crate::core::{FormulaError, FormulaResult, Quantity, Solution};

/// Computes the divider output voltage
///
/// All three fields are expected to be filled. Blank fields are rejected
/// earlier by the registry entry with [`FormulaError::MissingValues`]; here
/// they simply fail to parse.
pub fn solve(vin: &str, r1: &str, r2: &str) -> FormulaResult<Solution> {
    let vin = parse_required(vin)?;
    let r1 = parse_required(r1)?;
    let r2 = parse_required(r2)?;

    let total = r1 + r2;
    if total == 0.0 {
        return Err(FormulaError::ZeroResistorSum);
    }

    Solution::new(Quantity::OutputVoltage, vin * (r2 / total))
}
