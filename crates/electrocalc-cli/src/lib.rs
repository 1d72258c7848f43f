//! Electrocalc CLI Library
//!
//! Command-line and terminal front end for the `electrocalc` formulas.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, FormatArg, SolveArgs, SolveCommand, TuiArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_list, render_solve, CalculatorEntry, OutputFormat, Reporter, SolveReport};
