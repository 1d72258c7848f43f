//! Live-updating calculator panel
//!
//! A panel owns the text fields of one calculator and its readout. Every
//! edit re-runs the solver before returning and then notifies listeners, so
//! the readout always reflects the current text, including half-typed input.

use std::fmt;

use crate::core::{render, FormulaResult, Solution};
use crate::registry::Calculator;

/// Single-line text buffer with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl TextField {
    /// Creates an empty field
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of chars in the field
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the field holds no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the text and moves the cursor to the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    /// Empties the field
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Inserts a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor; returns false at the start
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Deletes the character under the cursor; returns false at the end
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Moves the cursor one char left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one char right
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Moves the cursor to the start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Callback invoked with the new readout after each recomputation
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// Input fields and readout for one calculator
pub struct CalculatorPanel {
    calculator: &'static Calculator,
    fields: Vec<TextField>,
    focus: usize,
    outcome: Option<FormulaResult<Solution>>,
    readout: String,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for CalculatorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorPanel")
            .field("calculator", &self.calculator.name)
            .field("fields", &self.fields)
            .field("focus", &self.focus)
            .field("readout", &self.readout)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CalculatorPanel {
    /// Creates a panel with empty fields and an empty readout
    #[must_use]
    pub fn new(calculator: &'static Calculator) -> Self {
        Self {
            calculator,
            fields: vec![TextField::new(); calculator.field_count()],
            focus: 0,
            outcome: None,
            readout: String::new(),
            listeners: Vec::new(),
        }
    }

    /// The calculator this panel evaluates
    #[must_use]
    pub fn calculator(&self) -> &'static Calculator {
        self.calculator
    }

    /// All fields in solver order
    #[must_use]
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    /// Text of field `index`, if it exists
    #[must_use]
    pub fn field_text(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(TextField::text)
    }

    /// Index of the focused field
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The focused field
    #[must_use]
    pub fn focused(&self) -> &TextField {
        &self.fields[self.focus]
    }

    /// Current readout; empty until the first edit
    #[must_use]
    pub fn readout(&self) -> &str {
        &self.readout
    }

    /// Last evaluation result; `None` until the first edit
    #[must_use]
    pub fn outcome(&self) -> Option<&FormulaResult<Solution>> {
        self.outcome.as_ref()
    }

    /// Registers a callback fired after every recomputation
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Moves focus to the next field, wrapping around
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Focuses field `index`; out-of-range indices are ignored
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Replaces the text of field `index` and recomputes
    ///
    /// Returns false if there is no such field.
    pub fn set_field(&mut self, index: usize, text: &str) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        field.set(text);
        self.recompute();
        true
    }

    /// Types a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        self.fields[self.focus].insert(c);
        self.recompute();
    }

    /// Backspace in the focused field
    pub fn backspace(&mut self) {
        if self.fields[self.focus].backspace() {
            self.recompute();
        }
    }

    /// Forward delete in the focused field
    pub fn delete(&mut self) {
        if self.fields[self.focus].delete() {
            self.recompute();
        }
    }

    /// Moves the focused field's cursor left
    pub fn cursor_left(&mut self) {
        self.fields[self.focus].move_left();
    }

    /// Moves the focused field's cursor right
    pub fn cursor_right(&mut self) {
        self.fields[self.focus].move_right();
    }

    /// Moves the focused field's cursor to the start
    pub fn cursor_home(&mut self) {
        self.fields[self.focus].move_home();
    }

    /// Moves the focused field's cursor to the end
    pub fn cursor_end(&mut self) {
        self.fields[self.focus].move_end();
    }

    /// Empties the focused field
    pub fn clear_field(&mut self) {
        self.fields[self.focus].clear();
        self.recompute();
    }

    /// Empties every field and refocuses the first
    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
        self.recompute();
    }

    /// Re-runs the solver against the current text and notifies listeners
    pub fn recompute(&mut self) {
        let inputs: Vec<&str> = self.fields.iter().map(TextField::text).collect();
        let outcome = self.calculator.solve(&inputs);
        self.readout = render(&outcome);
        self.outcome = Some(outcome);
        tracing::debug!(
            calculator = self.calculator.slug,
            readout = %self.readout,
            "recomputed"
        );
        for listener in &mut self.listeners {
            listener(&self.readout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn panel(slug: &str) -> CalculatorPanel {
        CalculatorPanel::new(find(slug).unwrap())
    }

    fn type_str(panel: &mut CalculatorPanel, s: &str) {
        for c in s.chars() {
            panel.insert_char(c);
        }
    }

    // ===== TextField tests =====

    #[test]
    fn test_field_insert_and_cursor() {
        let mut f = TextField::new();
        f.insert('1');
        f.insert('0');
        assert_eq!(f.text(), "10");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_field_insert_in_middle() {
        let mut f = TextField::new();
        f.set("15");
        f.move_left();
        f.insert('.');
        assert_eq!(f.text(), "1.5");
    }

    #[test]
    fn test_field_multibyte_text() {
        let mut f = TextField::new();
        f.set("Ω1");
        assert_eq!(f.len(), 2);
        f.move_home();
        f.move_right();
        f.insert('x');
        assert_eq!(f.text(), "Ωx1");
        assert!(f.backspace());
        assert!(f.backspace());
        assert_eq!(f.text(), "1");
    }

    #[test]
    fn test_field_backspace_at_start() {
        let mut f = TextField::new();
        f.set("12");
        f.move_home();
        assert!(!f.backspace());
        assert_eq!(f.text(), "12");
    }

    #[test]
    fn test_field_delete() {
        let mut f = TextField::new();
        f.set("123");
        assert!(!f.delete());
        f.move_home();
        assert!(f.delete());
        assert_eq!(f.text(), "23");
    }

    #[test]
    fn test_field_cursor_bounds() {
        let mut f = TextField::new();
        f.set("ab");
        f.move_right();
        assert_eq!(f.cursor(), 2);
        f.move_home();
        f.move_left();
        assert_eq!(f.cursor(), 0);
        f.move_end();
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_field_clear() {
        let mut f = TextField::new();
        f.set("99");
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
    }

    // ===== CalculatorPanel tests =====

    #[test]
    fn test_panel_starts_empty() {
        let p = panel("ohms-law");
        assert_eq!(p.fields().len(), 3);
        assert_eq!(p.focus(), 0);
        assert_eq!(p.readout(), "");
        assert!(p.outcome().is_none());
    }

    #[test]
    fn test_panel_outcome_tracks_readout() {
        let mut p = panel("ohms-law");
        p.set_field(1, "2");
        p.set_field(2, "5");
        let solution = p.outcome().unwrap().unwrap();
        assert_eq!(solution.value, 10.0);
        p.set_field(0, "1");
        assert_eq!(p.outcome(), Some(&Err(crate::core::FormulaError::ExactlyTwoRequired)));
    }

    #[test]
    fn test_panel_recomputes_on_every_keystroke() {
        let mut p = panel("ohms-law");
        p.insert_char('1');
        assert_eq!(p.readout(), "Enter exactly two values to calculate the third.");
        p.insert_char('0');
        p.focus_next();
        p.insert_char('-');
        assert_eq!(p.readout(), "Invalid input: non-numeric value provided.");
        p.backspace();
        p.insert_char('2');
        assert_eq!(p.readout(), "Resistance (R) = 5.000 Ω");
    }

    #[test]
    fn test_panel_focus_wraps() {
        let mut p = panel("voltage-divider");
        p.focus_prev();
        assert_eq!(p.focus(), 2);
        p.focus_next();
        assert_eq!(p.focus(), 0);
    }

    #[test]
    fn test_panel_single_field_focus() {
        let mut p = panel("parallel");
        p.focus_next();
        assert_eq!(p.focus(), 0);
        p.focus_prev();
        assert_eq!(p.focus(), 0);
    }

    #[test]
    fn test_panel_focus_does_not_recompute() {
        let mut p = panel("ohms-law");
        p.focus_next();
        p.set_focus(2);
        assert_eq!(p.focus(), 2);
        p.set_focus(7);
        assert_eq!(p.focus(), 2);
        assert_eq!(p.readout(), "");
    }

    #[test]
    fn test_panel_set_field() {
        let mut p = panel("voltage-divider");
        assert!(p.set_field(0, "10"));
        assert_eq!(p.readout(), "Enter all three values.");
        p.set_field(1, "100");
        p.set_field(2, "100");
        assert_eq!(p.readout(), "Output Voltage (Vout) = 5.000 V");
        assert!(!p.set_field(3, "1"));
        assert_eq!(p.field_text(1), Some("100"));
        assert_eq!(p.field_text(9), None);
    }

    #[test]
    fn test_panel_clear_field_and_all() {
        let mut p = panel("ohms-law");
        p.set_field(0, "10");
        p.set_field(1, "2");
        p.set_focus(1);
        p.clear_field();
        assert_eq!(p.field_text(1), Some(""));
        assert_eq!(p.readout(), "Enter exactly two values to calculate the third.");
        p.clear_all();
        assert!(p.fields().iter().all(TextField::is_empty));
        assert_eq!(p.focus(), 0);
    }

    #[test]
    fn test_panel_noop_edits_skip_recompute() {
        let mut p = panel("parallel");
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        p.on_change(move |_| *counter.borrow_mut() += 1);
        p.backspace();
        p.delete();
        p.cursor_left();
        p.cursor_right();
        p.cursor_home();
        p.cursor_end();
        assert_eq!(*calls.borrow(), 0);
        p.insert_char('1');
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_panel_listeners_receive_readout() {
        let mut p = panel("parallel");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        p.on_change(move |readout| sink.borrow_mut().push(readout.to_string()));
        type_str(&mut p, "100,100");
        let seen = seen.borrow();
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], "Enter at least two resistor values.");
        assert_eq!(seen[3], "Enter at least two resistor values.");
        assert_eq!(seen[6], "Total Resistance (Rtotal) = 50.000 Ω");
    }

    #[test]
    fn test_panel_debug() {
        let p = panel("ohms-law");
        let debug = format!("{p:?}");
        assert!(debug.contains("Ohm's Law"));
        assert!(debug.contains("listeners"));
    }
}
