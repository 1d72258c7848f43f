//! `electrocalc list`

use electrocalc::prelude::CALCULATORS;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_list, CalculatorEntry, Reporter};

/// Prints every registry entry in sidebar order
pub fn run_list(config: &CliConfig) -> CliResult<()> {
    let entries: Vec<CalculatorEntry> = CALCULATORS.iter().map(CalculatorEntry::from).collect();
    let rendered = render_list(&entries, config.format)?;
    tracing::debug!(count = entries.len(), "listing calculators");

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    reporter.plain(&rendered);
    if !rendered.ends_with('\n') {
        reporter.plain("\n");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_run_list_text() {
        assert!(run_list(&CliConfig::new()).is_ok());
    }

    #[test]
    fn test_run_list_json() {
        assert!(run_list(&CliConfig::new().with_format(OutputFormat::Json)).is_ok());
    }
}
