//! Electrocalc: electronics calculator
//!
//! ## Usage
//!
//! ```bash
//! electrocalc                                            # Open the TUI
//! electrocalc tui --calculator parallel                  # Start on a calculator
//! electrocalc solve ohms-law --voltage 10 --current 2    # One-shot solve
//! electrocalc solve parallel "100, 220" --format json    # JSON output
//! electrocalc list                                       # Show calculators
//! ```

use clap::Parser;
use electrocalc_cli::{
    handlers::{run_list, run_solve, run_tui},
    logging, Cli, CliConfig, CliResult, Commands, TuiArgs, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    let command = cli.command.unwrap_or(Commands::Tui(TuiArgs::default()));
    let interactive = matches!(command, Commands::Tui(_));
    let sink = logging::init(&config, interactive)?;
    tracing::debug!(?sink, filter = config.filter_directive(), "logging ready");

    match command {
        Commands::Tui(args) => run_tui(&config, &args),
        Commands::Solve(args) => run_solve(&config, &args.calculator),
        Commands::List => run_list(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into())
        .with_log_file(cli.log_file.clone())
        .with_log_filter(cli.log_level.clone())
        .with_log_json(cli.log_json)
}
