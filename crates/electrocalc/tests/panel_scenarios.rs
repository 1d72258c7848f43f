//! End-to-end panel scenarios
//!
//! Each test walks a user session through the public API and checks what the
//! readout shows after every step.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use electrocalc::driver::{
    verify_live_updates, verify_ohms_law, verify_parallel_resistance, verify_voltage_divider,
};
use electrocalc::prelude::*;

// ===== PanelDriver scenarios =====

#[test]
fn test_panel_ohms_law() {
    verify_ohms_law(&mut PanelDriver::new()).unwrap();
}

#[test]
fn test_panel_voltage_divider() {
    verify_voltage_divider(&mut PanelDriver::new()).unwrap();
}

#[test]
fn test_panel_parallel_resistance() {
    verify_parallel_resistance(&mut PanelDriver::new()).unwrap();
}

#[test]
fn test_panel_live_updates() {
    verify_live_updates(&mut PanelDriver::new()).unwrap();
}

// ===== Session walkthroughs =====

#[test]
fn test_typing_session_emits_every_readout() {
    let mut panel = CalculatorPanel::new(find("ohms-law").unwrap());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    panel.on_change(move |readout| sink.borrow_mut().push(readout.to_string()));

    for c in "10".chars() {
        panel.insert_char(c);
    }
    panel.focus_next();
    panel.insert_char('4');

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], "Enter exactly two values to calculate the third.");
    assert_eq!(seen[2], "Resistance (R) = 2.500 Ω");
}

#[test]
fn test_fixing_a_typo_recovers() {
    let mut panel = CalculatorPanel::new(find("parallel").unwrap());
    panel.set_field(0, "100, 22o");
    assert_eq!(
        panel.readout(),
        "Invalid input: expected a comma-separated list of numbers."
    );
    assert!(matches!(panel.outcome(), Some(Err(e)) if e.kind() == ErrorKind::Parse));

    panel.backspace();
    panel.insert_char('0');
    assert_eq!(panel.field_text(0), Some("100, 220"));
    assert_eq!(panel.readout(), "Total Resistance (Rtotal) = 68.750 Ω");
}

#[test]
fn test_trailing_comma_waits_for_next_value() {
    let mut panel = CalculatorPanel::new(find("parallel").unwrap());
    panel.set_field(0, "100, 100,");
    assert_eq!(panel.readout(), "Enter at least two resistor values.");
    panel.insert_char('5');
    panel.insert_char('0');
    assert_eq!(panel.readout(), "Total Resistance (Rtotal) = 25.000 Ω");
}

#[test]
fn test_solution_serializes() {
    let solution = find("voltage-divider")
        .unwrap()
        .solve(&["12", "1000", "2000"])
        .unwrap();
    let json = serde_json::to_value(solution).unwrap();
    assert_eq!(json["quantity"], "OutputVoltage");
    assert!((json["value"].as_f64().unwrap() - 8.0).abs() < 1e-9);
}

// ===== TuiDriver scenarios =====

#[cfg(feature = "tui")]
mod tui {
    use super::*;
    use electrocalc::driver::run_all_scenarios;
    use electrocalc::tui::{App, KeyAction};

    #[test]
    fn test_tui_all_scenarios() {
        run_all_scenarios(&mut TuiDriver::new()).unwrap();
    }

    #[test]
    fn test_tui_and_panel_agree() {
        let mut tui = TuiDriver::new();
        let mut panel = PanelDriver::new();
        for (name, values) in [
            ("ohms-law", &["3.3", "", "1000"][..]),
            ("voltage-divider", &["5", "10000", "4700"][..]),
            ("parallel", &["1000, 1000, 500"][..]),
        ] {
            tui.select(name).unwrap();
            panel.select(name).unwrap();
            for (i, v) in values.iter().enumerate() {
                tui.fill(i, v).unwrap();
                panel.fill(i, v).unwrap();
            }
            assert_eq!(tui.readout(), panel.readout());
        }
    }

    #[test]
    fn test_sidebar_walk_resets_fields() {
        let mut app = App::new();
        app.apply(KeyAction::InsertChar('5'));
        app.apply(KeyAction::SelectCalculator(2));
        app.apply(KeyAction::InsertChar('1'));
        app.apply(KeyAction::SelectCalculator(0));
        assert_eq!(app.panel().field_text(0), Some(""));
        assert!(app.panel().readout().is_empty());
    }
}
