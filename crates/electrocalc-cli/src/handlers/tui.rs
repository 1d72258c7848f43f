//! `electrocalc tui`

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use electrocalc::prelude::{find, CALCULATORS};
use electrocalc::tui::{run, App};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::commands::TuiArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;

/// Sidebar index of the calculator named on the command line
pub fn resolve_calculator(name: &str) -> CliResult<usize> {
    find(name)
        .and_then(|calc| CALCULATORS.iter().position(|c| c == calc))
        .ok_or_else(|| {
            let known: Vec<&str> = CALCULATORS.iter().map(|c| c.slug).collect();
            CliError::invalid_argument(format!(
                "unknown calculator '{name}' (expected one of: {})",
                known.join(", ")
            ))
        })
}

/// Raw mode plus alternate screen; put back on `restore` or on drop
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failed switch still leaves raw mode
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Undoes both steps, reporting the first failure
    fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        raw.and(screen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        }
    }
}

/// Combines the loop outcome with the restore outcome; the loop error wins
fn finish<T>(outcome: io::Result<T>, restore: io::Result<()>) -> io::Result<T> {
    let value = outcome?;
    restore?;
    Ok(value)
}

/// Runs the terminal UI until the user quits
pub fn run_tui(config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    let selected = resolve_calculator(&args.calculator)?;
    tracing::info!(calculator = CALCULATORS[selected].slug, "starting tui");

    let guard = TerminalGuard::enter()?;
    let outcome = Terminal::new(CrosstermBackend::new(io::stdout()))
        .and_then(|mut terminal| run(&mut terminal, App::with_selected(selected)));
    let app = finish(outcome, guard.restore())?;

    tracing::info!(
        calculator = app.current().slug,
        readout = app.panel().readout(),
        "tui closed"
    );
    if config.verbosity.is_verbose() && !app.panel().readout().is_empty() {
        let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
        reporter.info(&format!("{}: {}", app.current().name, app.panel().readout()));
    }
    Ok(())
}
