//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run against
//! every front end: the bare panel and the TUI app.

use thiserror::Error;

use crate::panel::CalculatorPanel;
use crate::registry::{default_calculator, find};

/// Why a driver step could not be performed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// No registry entry matches the name
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
    /// The active calculator has fewer fields
    #[error("field {0} does not exist")]
    NoSuchField(usize),
}

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use electrocalc::driver::{CalculatorDriver, PanelDriver};
///
/// let mut driver = PanelDriver::new();
/// driver.select("parallel").unwrap();
/// driver.fill(0, "100, 100").unwrap();
/// assert_eq!(driver.readout(), "Total Resistance (Rtotal) = 50.000 Ω");
/// ```
pub trait CalculatorDriver {
    /// Switches to the calculator with this slug or name
    fn select(&mut self, name: &str) -> Result<(), DriverError>;

    /// Replaces the text of one field
    fn fill(&mut self, index: usize, text: &str) -> Result<(), DriverError>;

    /// Current readout
    fn readout(&self) -> String;

    /// Current text of one field
    fn field(&self, index: usize) -> Option<String>;

    /// Empties every field of the active calculator
    fn clear(&mut self);
}

/// Drives a [`CalculatorPanel`] directly
#[derive(Debug)]
pub struct PanelDriver {
    panel: CalculatorPanel,
}

impl Default for PanelDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelDriver {
    /// Creates a driver on the default calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            panel: CalculatorPanel::new(default_calculator()),
        }
    }

    /// The driven panel
    #[must_use]
    pub fn panel(&self) -> &CalculatorPanel {
        &self.panel
    }
}

impl CalculatorDriver for PanelDriver {
    fn select(&mut self, name: &str) -> Result<(), DriverError> {
        let calculator = find(name).ok_or_else(|| DriverError::UnknownCalculator(name.into()))?;
        self.panel = CalculatorPanel::new(calculator);
        Ok(())
    }

    fn fill(&mut self, index: usize, text: &str) -> Result<(), DriverError> {
        if self.panel.set_field(index, text) {
            Ok(())
        } else {
            Err(DriverError::NoSuchField(index))
        }
    }

    fn readout(&self) -> String {
        self.panel.readout().to_string()
    }

    fn field(&self, index: usize) -> Option<String> {
        self.panel.field_text(index).map(str::to_string)
    }

    fn clear(&mut self) {
        self.panel.clear_all();
    }
}

/// TUI driver: every step goes through key actions
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, DriverError};
    use crate::registry::{find, CALCULATORS};
    use crate::tui::{App, KeyAction};

    /// Drives [`App`] the way a user at the keyboard would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: App,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: App) -> Self {
            Self { app }
        }

        /// The driven app
        #[must_use]
        pub fn app(&self) -> &App {
            &self.app
        }

        /// The driven app, mutably
        pub fn app_mut(&mut self) -> &mut App {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn select(&mut self, name: &str) -> Result<(), DriverError> {
            let target = find(name).ok_or_else(|| DriverError::UnknownCalculator(name.into()))?;
            let index = CALCULATORS
                .iter()
                .position(|c| c == target)
                .ok_or_else(|| DriverError::UnknownCalculator(name.into()))?;
            self.app.apply(KeyAction::SelectCalculator(index));
            Ok(())
        }

        fn fill(&mut self, index: usize, text: &str) -> Result<(), DriverError> {
            if index >= self.app.panel().fields().len() {
                return Err(DriverError::NoSuchField(index));
            }
            while self.app.panel().focus() != index {
                self.app.apply(KeyAction::NextField);
            }
            self.app.apply(KeyAction::ClearField);
            for c in text.chars() {
                self.app.apply(KeyAction::InsertChar(c));
            }
            Ok(())
        }

        fn readout(&self) -> String {
            self.app.panel().readout().to_string()
        }

        fn field(&self, index: usize) -> Option<String> {
            self.app.panel().field_text(index).map(str::to_string)
        }

        fn clear(&mut self) {
            self.app.apply(KeyAction::ClearAll);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

fn fill_all<D: CalculatorDriver>(driver: &mut D, values: &[&str]) -> Result<(), DriverError> {
    driver.clear();
    for (i, value) in values.iter().enumerate() {
        driver.fill(i, value)?;
    }
    Ok(())
}

/// Verifies the Ohm's Law two-of-three rule
///
/// # Errors
///
/// Returns an error if the driver cannot select or fill
///
/// # Panics
///
/// Panics when a readout differs from the expected text
pub fn verify_ohms_law<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.select("ohms-law")?;

    fill_all(driver, &["10", "2", ""])?;
    assert_eq!(driver.readout(), "Resistance (R) = 5.000 Ω");

    fill_all(driver, &["10", "", "5"])?;
    assert_eq!(driver.readout(), "Current (I) = 2.000 A");

    fill_all(driver, &["", "2", "5"])?;
    assert_eq!(driver.readout(), "Voltage (V) = 10.000 V");

    fill_all(driver, &["10", "0", ""])?;
    assert_eq!(driver.readout(), "Current cannot be zero.");

    fill_all(driver, &["10", "", "0"])?;
    assert_eq!(driver.readout(), "Resistance cannot be zero.");

    fill_all(driver, &["10", "2", "5"])?;
    assert_eq!(
        driver.readout(),
        "Enter exactly two values to calculate the third."
    );

    fill_all(driver, &["10", "two", ""])?;
    assert_eq!(driver.readout(), "Invalid input: non-numeric value provided.");
    Ok(())
}

/// Verifies the voltage divider, including the blank-field guard
///
/// # Errors
///
/// Returns an error if the driver cannot select or fill
///
/// # Panics
///
/// Panics when a readout differs from the expected text
pub fn verify_voltage_divider<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.select("voltage-divider")?;

    fill_all(driver, &["10", "100", "100"])?;
    assert_eq!(driver.readout(), "Output Voltage (Vout) = 5.000 V");

    fill_all(driver, &["10", "0", "0"])?;
    assert_eq!(driver.readout(), "Sum of resistors cannot be zero.");

    fill_all(driver, &["10", "100", ""])?;
    assert_eq!(driver.readout(), "Enter all three values.");

    fill_all(driver, &["10", "1k", "100"])?;
    assert_eq!(driver.readout(), "Invalid input: non-numeric value provided.");
    Ok(())
}

/// Verifies parallel resistance validation order and result
///
/// # Errors
///
/// Returns an error if the driver cannot select or fill
///
/// # Panics
///
/// Panics when a readout differs from the expected text
pub fn verify_parallel_resistance<D: CalculatorDriver>(
    driver: &mut D,
) -> Result<(), DriverError> {
    driver.select("parallel")?;

    fill_all(driver, &["100,100"])?;
    assert_eq!(driver.readout(), "Total Resistance (Rtotal) = 50.000 Ω");

    fill_all(driver, &["10"])?;
    assert_eq!(driver.readout(), "Enter at least two resistor values.");

    fill_all(driver, &["10,-5"])?;
    assert_eq!(driver.readout(), "Resistor values must be greater than zero.");

    fill_all(driver, &["10,abc"])?;
    assert_eq!(
        driver.readout(),
        "Invalid input: expected a comma-separated list of numbers."
    );
    Ok(())
}

/// Verifies that every edit refreshes the readout and that switching
/// calculators starts from empty fields
///
/// # Errors
///
/// Returns an error if the driver cannot select or fill
///
/// # Panics
///
/// Panics when a readout or field differs from the expected text
pub fn verify_live_updates<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    driver.select("ohms-law")?;
    assert!(driver.readout().is_empty());

    driver.fill(0, "12")?;
    assert_eq!(
        driver.readout(),
        "Enter exactly two values to calculate the third."
    );
    driver.fill(1, "3")?;
    assert_eq!(driver.readout(), "Resistance (R) = 4.000 Ω");
    driver.fill(1, "4")?;
    assert_eq!(driver.readout(), "Resistance (R) = 3.000 Ω");
    driver.fill(1, "")?;
    assert_eq!(
        driver.readout(),
        "Enter exactly two values to calculate the third."
    );

    driver.select("parallel")?;
    assert_eq!(driver.field(0).as_deref(), Some(""));
    assert_eq!(driver.field(1), None);
    assert!(driver.readout().is_empty());

    driver.select("ohms-law")?;
    assert_eq!(driver.field(0).as_deref(), Some(""));
    assert!(driver.readout().is_empty());
    Ok(())
}

/// Runs every scenario
///
/// # Errors
///
/// Returns the first driver error
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) -> Result<(), DriverError> {
    verify_ohms_law(driver)?;
    verify_voltage_divider(driver)?;
    verify_parallel_resistance(driver)?;
    verify_live_updates(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== PanelDriver tests =====

    #[test]
    fn test_panel_driver_default_calculator() {
        let driver = PanelDriver::default();
        assert_eq!(driver.panel().calculator().slug, "ohms-law");
        assert!(driver.readout().is_empty());
    }

    #[test]
    fn test_panel_driver_unknown_calculator() {
        let mut driver = PanelDriver::new();
        assert_eq!(
            driver.select("inductor"),
            Err(DriverError::UnknownCalculator("inductor".into()))
        );
    }

    #[test]
    fn test_panel_driver_no_such_field() {
        let mut driver = PanelDriver::new();
        driver.select("parallel").unwrap();
        assert_eq!(driver.fill(1, "1"), Err(DriverError::NoSuchField(1)));
    }

    #[test]
    fn test_driver_error_display() {
        assert_eq!(
            DriverError::UnknownCalculator("x".into()).to_string(),
            "unknown calculator: x"
        );
        assert_eq!(DriverError::NoSuchField(4).to_string(), "field 4 does not exist");
    }

    #[test]
    fn test_panel_all_scenarios() {
        let mut driver = PanelDriver::new();
        run_all_scenarios(&mut driver).unwrap();
    }

    #[test]
    fn test_panel_live_updates() {
        verify_live_updates(&mut PanelDriver::new()).unwrap();
    }

    // ===== TUI Driver Tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crate::tui::App;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.app().selected(), 0);
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(App::with_selected(2));
            assert_eq!(driver.app().current().slug, "parallel");
        }

        #[test]
        fn test_tui_driver_select_moves_sidebar() {
            let mut driver = TuiDriver::new();
            driver.select("Voltage Divider").unwrap();
            assert_eq!(driver.app().selected(), 1);
        }

        #[test]
        fn test_tui_driver_fill_types_into_field() {
            let mut driver = TuiDriver::new();
            driver.fill(2, "47").unwrap();
            assert_eq!(driver.app().panel().focus(), 2);
            assert_eq!(driver.field(2).as_deref(), Some("47"));
            driver.fill(2, "5").unwrap();
            assert_eq!(driver.field(2).as_deref(), Some("5"));
        }

        #[test]
        fn test_tui_driver_no_such_field() {
            let mut driver = TuiDriver::new();
            assert_eq!(driver.fill(3, "1"), Err(DriverError::NoSuchField(3)));
        }

        #[test]
        fn test_tui_driver_app_mut() {
            let mut driver = TuiDriver::new();
            driver.app_mut().quit();
            assert!(driver.app().should_quit());
        }

        #[test]
        fn test_unified_ohms_law() {
            verify_ohms_law(&mut TuiDriver::new()).unwrap();
        }

        #[test]
        fn test_unified_voltage_divider() {
            verify_voltage_divider(&mut TuiDriver::new()).unwrap();
        }

        #[test]
        fn test_unified_parallel_resistance() {
            verify_parallel_resistance(&mut TuiDriver::new()).unwrap();
        }

        #[test]
        fn test_unified_live_updates() {
            verify_live_updates(&mut TuiDriver::new()).unwrap();
        }

        #[test]
        fn test_all_scenarios() {
            run_all_scenarios(&mut TuiDriver::new()).unwrap();
        }
    }
}
