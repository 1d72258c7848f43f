//! TUI application state
//!
//! The shell's only state machine: which calculator is shown. Selecting one
//! replaces the active panel with a fresh, empty one.

use crate::panel::CalculatorPanel;
use crate::registry::{Calculator, CALCULATORS};

use super::input::KeyAction;

/// Sidebar selection plus the active calculator panel
#[derive(Debug)]
pub struct App {
    selected: usize,
    panel: CalculatorPanel,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the app showing the first registry entry
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: 0,
            panel: CalculatorPanel::new(&CALCULATORS[0]),
            should_quit: false,
        }
    }

    /// Creates the app showing the calculator at `index` (clamped)
    #[must_use]
    pub fn with_selected(index: usize) -> Self {
        let mut app = Self::new();
        app.select(index);
        app
    }

    /// All calculators in sidebar order
    #[must_use]
    pub fn calculators(&self) -> &'static [Calculator] {
        &CALCULATORS
    }

    /// Index of the calculator on screen
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The calculator on screen
    #[must_use]
    pub fn current(&self) -> &'static Calculator {
        self.panel.calculator()
    }

    /// The active panel
    #[must_use]
    pub fn panel(&self) -> &CalculatorPanel {
        &self.panel
    }

    /// The active panel, mutably
    pub fn panel_mut(&mut self) -> &mut CalculatorPanel {
        &mut self.panel
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Shows the calculator at `index`, clamped to the registry
    pub fn select(&mut self, index: usize) {
        let index = index.min(CALCULATORS.len() - 1);
        self.selected = index;
        self.panel = CalculatorPanel::new(&CALCULATORS[index]);
        tracing::info!(calculator = CALCULATORS[index].slug, "selected calculator");
    }

    /// Shows the next calculator, wrapping around
    pub fn select_next(&mut self) {
        self.select((self.selected + 1) % CALCULATORS.len());
    }

    /// Shows the previous calculator, wrapping around
    pub fn select_prev(&mut self) {
        self.select((self.selected + CALCULATORS.len() - 1) % CALCULATORS.len());
    }

    /// Applies one key action
    pub fn apply(&mut self, action: KeyAction) {
        tracing::trace!(?action, "key action");
        match action {
            KeyAction::InsertChar(c) => self.panel.insert_char(c),
            KeyAction::Backspace => self.panel.backspace(),
            KeyAction::Delete => self.panel.delete(),
            KeyAction::CursorLeft => self.panel.cursor_left(),
            KeyAction::CursorRight => self.panel.cursor_right(),
            KeyAction::CursorHome => self.panel.cursor_home(),
            KeyAction::CursorEnd => self.panel.cursor_end(),
            KeyAction::NextField => self.panel.focus_next(),
            KeyAction::PrevField => self.panel.focus_prev(),
            KeyAction::NextCalculator => self.select_next(),
            KeyAction::PrevCalculator => self.select_prev(),
            KeyAction::SelectCalculator(index) if index < CALCULATORS.len() => {
                self.select(index);
            }
            KeyAction::ClearField => self.panel.clear_field(),
            KeyAction::ClearAll => self.panel.clear_all(),
            KeyAction::Quit => self.quit(),
            KeyAction::SelectCalculator(_) | KeyAction::None => {}
        }
    }
}
