//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused field
    InsertChar(char),
    /// Delete character before cursor (backspace)
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move cursor to start
    CursorHome,
    /// Move cursor to end
    CursorEnd,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Show the next calculator in the sidebar
    NextCalculator,
    /// Show the previous calculator in the sidebar
    PrevCalculator,
    /// Show the calculator at this sidebar index
    SelectCalculator(usize),
    /// Clear the focused field
    ClearField,
    /// Clear every field of the panel
    ClearAll,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Every printable character is passed through; rejecting non-numeric
    /// text is the solver's job, so the readout can say why.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('u') => KeyAction::ClearField,
                KeyCode::Char('a') => KeyAction::CursorHome,
                KeyCode::Char('e') => KeyAction::CursorEnd,
                KeyCode::Char('n') => KeyAction::NextCalculator,
                KeyCode::Char('p') => KeyAction::PrevCalculator,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Home => KeyAction::CursorHome,
            KeyCode::End => KeyAction::CursorEnd,
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
            KeyCode::PageDown => KeyAction::NextCalculator,
            KeyCode::PageUp => KeyAction::PrevCalculator,
            KeyCode::F(n @ 1..=9) => KeyAction::SelectCalculator(usize::from(n - 1)),
            KeyCode::Esc => KeyAction::ClearAll,
            _ => KeyAction::None,
        }
    }
}
