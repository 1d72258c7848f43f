//! Formula engine: pure solvers from raw field text to a readout
//!
//! Every solver takes the current text of its fields and returns a
//! [`FormulaResult`]. Nothing here keeps state between calls; the panel
//! layer calls back into these functions on every keystroke.

pub mod field;
pub mod ohms_law;
pub mod parallel;
pub mod voltage_divider;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for formula evaluation
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Broad classification of a [`FormulaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A field does not hold a number
    Parse,
    /// Numbers are well-formed but the combination cannot be solved
    Validation,
}

/// Every message a calculator can show instead of a result
///
/// The `Display` text is exactly what ends up in the readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FormulaError {
    /// A scalar field holds something other than a finite number
    #[error("Invalid input: non-numeric value provided.")]
    NonNumeric,
    /// A resistor list token is not a finite number
    #[error("Invalid input: expected a comma-separated list of numbers.")]
    MalformedList,
    /// Ohm's Law needs exactly two of its three fields
    #[error("Enter exactly two values to calculate the third.")]
    ExactlyTwoRequired,
    /// Ohm's Law with I = 0 while solving for R
    #[error("Current cannot be zero.")]
    ZeroCurrent,
    /// Ohm's Law with R = 0 while solving for I
    #[error("Resistance cannot be zero.")]
    ZeroResistance,
    /// Voltage divider with at least one empty field
    #[error("Enter all three values.")]
    MissingValues,
    /// Voltage divider with R1 + R2 = 0
    #[error("Sum of resistors cannot be zero.")]
    ZeroResistorSum,
    /// Parallel resistance with fewer than two entries
    #[error("Enter at least two resistor values.")]
    TooFewResistors,
    /// Parallel resistance with an entry <= 0
    #[error("Resistor values must be greater than zero.")]
    NonPositiveResistor,
    /// The arithmetic overflowed or produced NaN
    #[error("Result is out of range.")]
    OutOfRange,
}

impl FormulaError {
    /// Returns whether this is a parse or a validation failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonNumeric | Self::MalformedList => ErrorKind::Parse,
            _ => ErrorKind::Validation,
        }
    }
}

/// A physical quantity a calculator can solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    /// V, from Ohm's Law
    Voltage,
    /// I, from Ohm's Law
    Current,
    /// R, from Ohm's Law
    Resistance,
    /// Vout of a two-resistor divider
    OutputVoltage,
    /// Combined resistance of a parallel network
    TotalResistance,
}

impl Quantity {
    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Voltage => "Voltage",
            Self::Current => "Current",
            Self::Resistance => "Resistance",
            Self::OutputVoltage => "Output Voltage",
            Self::TotalResistance => "Total Resistance",
        }
    }

    /// Formula symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Current => "I",
            Self::Resistance => "R",
            Self::OutputVoltage => "Vout",
            Self::TotalResistance => "Rtotal",
        }
    }

    /// Unit suffix
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Voltage | Self::OutputVoltage => "V",
            Self::Current => "A",
            Self::Resistance | Self::TotalResistance => "Ω",
        }
    }
}

/// A solved value tagged with its quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// What was solved for
    pub quantity: Quantity,
    /// Unrounded value
    pub value: f64,
}

impl Solution {
    /// Wraps a computed value, rejecting NaN and infinities
    pub fn new(quantity: Quantity, value: f64) -> FormulaResult<Self> {
        if value.is_finite() {
            Ok(Self { quantity, value })
        } else {
            Err(FormulaError::OutOfRange)
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) = {:.3} {}",
            self.quantity.name(),
            self.quantity.symbol(),
            self.value,
            self.quantity.unit()
        )
    }
}

/// Renders an evaluation outcome as the readout string
#[must_use]
pub fn render(result: &FormulaResult<Solution>) -> String {
    match result {
        Ok(solution) => solution.to_string(),
        Err(e) => e.to_string(),
    }
}
