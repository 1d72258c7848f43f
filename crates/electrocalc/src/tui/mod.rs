//! Terminal front end: sidebar navigation plus a live-updating panel

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, ShellUI, APP_TITLE, HELP_SHORTCUTS};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

/// Runs the event loop until the user quits
///
/// The caller owns terminal setup and teardown (raw mode, alternate screen).
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<App> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.apply(input_handler.handle_key(key));
            }
        }
    }

    Ok(app)
}
