//! `electrocalc solve`

use electrocalc::prelude::find;

use crate::commands::SolveCommand;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_solve, OutputFormat, Reporter, SolveReport};

/// Solves one calculator without printing anything
pub fn solve_report(command: &SolveCommand) -> CliResult<SolveReport> {
    let slug = command.slug();
    let calculator =
        find(slug).ok_or_else(|| CliError::invalid_argument(format!("unknown calculator '{slug}'")))?;
    let inputs = command.inputs();
    tracing::debug!(calculator = slug, ?inputs, "solving");

    let result = calculator.solve(&inputs);
    let report = SolveReport::new(calculator, &result);
    tracing::info!(calculator = slug, ok = report.ok, readout = %report.readout, "solved");
    Ok(report)
}

/// Prints the readout; a message readout becomes [`CliError::Evaluation`]
pub fn run_solve(config: &CliConfig, command: &SolveCommand) -> CliResult<()> {
    let report = solve_report(command)?;
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let rendered = render_solve(&report, config.format)?;
    match config.format {
        OutputFormat::Json => reporter.plain(&format!("{rendered}\n")),
        OutputFormat::Text if report.ok => reporter.solution(&rendered),
        OutputFormat::Text => {}
    }

    if report.ok {
        Ok(())
    } else {
        Err(CliError::evaluation(report.readout))
    }
}
