//! Electronics Calculator
//!
//! Three everyday circuit formulas behind one interface: Ohm's Law, the
//! unloaded voltage divider, and resistors in parallel. Each calculator is a
//! registry entry with labelled text fields; a panel re-solves on every edit
//! and shows either a formatted result or a one-line message saying why it
//! cannot.
//!
//! # Example
//!
//! ```rust
//! use electrocalc::prelude::*;
//!
//! // Solve directly from field text
//! let ohms = find("ohms-law").unwrap();
//! assert_eq!(ohms.evaluate(&["10", "2", ""]), "Resistance (R) = 5.000 Ω");
//!
//! // Or through a live panel
//! let mut panel = CalculatorPanel::new(find("parallel").unwrap());
//! panel.set_field(0, "100, 100");
//! assert_eq!(panel.readout(), "Total Resistance (Rtotal) = 50.000 Ω");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod panel;
pub mod registry;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{render, ErrorKind, FormulaError, FormulaResult, Quantity, Solution};
    pub use crate::driver::{CalculatorDriver, DriverError, PanelDriver};
    pub use crate::panel::{CalculatorPanel, TextField};
    pub use crate::registry::{default_calculator, find, Calculator, CALCULATORS};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let calc = default_calculator();
        assert_eq!(calc.evaluate(&["", "2", "5"]), "Voltage (V) = 10.000 V");
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = CALCULATORS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Ohm's Law", "Voltage Divider", "Parallel Resistance"]);
    }

    #[test]
    fn test_error_classification() {
        let divider = find("voltage-divider").unwrap();
        let err = divider.solve(&["10", "0", "0"]).unwrap_err();
        assert_eq!(err, FormulaError::ZeroResistorSum);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(FormulaError::NonNumeric.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_solution_value() {
        let parallel = find("parallel").unwrap();
        let solution = parallel.solve(&["100, 100"]).unwrap();
        assert!((solution.value - 50.0).abs() < 1e-9);
        assert_eq!(solution.quantity.symbol(), "Rtotal");
    }

    #[test]
    fn test_panel_driver_through_prelude() {
        let mut driver = PanelDriver::new();
        driver.fill(0, "9").unwrap();
        driver.fill(2, "3").unwrap();
        assert_eq!(driver.readout(), "Current (I) = 3.000 A");
    }
}
