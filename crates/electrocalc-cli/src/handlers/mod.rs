//! Command handlers

pub mod list;
pub mod solve;
pub mod tui;

pub use list::run_list;
pub use solve::{run_solve, solve_report};
pub use tui::{resolve_calculator, run_tui};
