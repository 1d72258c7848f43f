//! The calculator table
//!
//! Each entry pairs display metadata with a solver over raw field text.
//! Navigation, the panel and the CLI all iterate [`CALCULATORS`]; adding a
//! calculator means adding one entry here.

use std::fmt;

use crate::core::{
    ohms_law, parallel, render, voltage_divider, FormulaError, FormulaResult, Solution,
};

/// Solver signature shared by every entry: one string per field
pub type SolveFn = fn(&[&str]) -> FormulaResult<Solution>;

/// One calculator: metadata plus its solver
#[derive(Clone, Copy)]
pub struct Calculator {
    /// Sidebar label
    pub name: &'static str,
    /// Identifier used on the command line
    pub slug: &'static str,
    /// Panel heading
    pub title: &'static str,
    /// One-line usage hint shown under the heading
    pub hint: &'static str,
    /// Field labels, in solver argument order
    pub fields: &'static [&'static str],
    solve: SolveFn,
}

impl Calculator {
    /// Runs the solver; missing trailing fields count as empty
    pub fn solve(&self, inputs: &[&str]) -> FormulaResult<Solution> {
        let mut padded = [""; 3];
        for (slot, text) in padded.iter_mut().zip(inputs.iter().copied()) {
            *slot = text;
        }
        (self.solve)(&padded[..self.fields.len().min(padded.len())])
    }

    /// Runs the solver and renders the readout string
    #[must_use]
    pub fn evaluate(&self, inputs: &[&str]) -> String {
        render(&self.solve(inputs))
    }

    /// Number of input fields
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("name", &self.name)
            .field("slug", &self.slug)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Calculator {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl Eq for Calculator {}

/// All calculators, in sidebar order; the first is shown at startup
pub static CALCULATORS: [Calculator; 3] = [
    Calculator {
        name: "Ohm's Law",
        slug: "ohms-law",
        title: "Ohm's Law (V = I × R)",
        hint: "Enter any two values to calculate the third.",
        fields: &["Voltage (V)", "Current (I)", "Resistance (R)"],
        solve: solve_ohms_law,
    },
    Calculator {
        name: "Voltage Divider",
        slug: "voltage-divider",
        title: "Voltage Divider",
        hint: "Calculates Vout = Vin × (R2 / (R1 + R2))",
        fields: &["Input Voltage (Vin)", "Resistor 1 (R1)", "Resistor 2 (R2)"],
        solve: solve_voltage_divider,
    },
    Calculator {
        name: "Parallel Resistance",
        slug: "parallel",
        title: "Parallel Resistance",
        hint: "Enter a comma-separated list of resistor values (R1, R2, ...)",
        fields: &["Resistor Values (Ω)"],
        solve: solve_parallel,
    },
];

/// Returns the calculator shown at startup
#[must_use]
pub fn default_calculator() -> &'static Calculator {
    &CALCULATORS[0]
}

/// Looks up a calculator by slug or display name, ignoring case
#[must_use]
pub fn find(name: &str) -> Option<&'static Calculator> {
    let name = name.trim();
    CALCULATORS
        .iter()
        .find(|c| c.slug.eq_ignore_ascii_case(name) || c.name.eq_ignore_ascii_case(name))
}

fn solve_ohms_law(inputs: &[&str]) -> FormulaResult<Solution> {
    ohms_law::solve(inputs[0], inputs[1], inputs[2])
}

fn solve_voltage_divider(inputs: &[&str]) -> FormulaResult<Solution> {
    if inputs.iter().any(|text| text.is_empty()) {
        return Err(FormulaError::MissingValues);
    }
    voltage_divider::solve(inputs[0], inputs[1], inputs[2])
}

fn solve_parallel(inputs: &[&str]) -> FormulaResult<Solution> {
    parallel::solve(inputs[0])
}
