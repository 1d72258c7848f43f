//! Output formatting

use console::{style, Term};
use electrocalc::prelude::{Calculator, FormulaResult, Solution};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for solve and list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Machine-readable outcome of one solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Calculator slug
    pub calculator: String,
    /// Whether a value was computed
    pub ok: bool,
    /// Exactly what the panel would show
    pub readout: String,
    /// Solved quantity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Solved quantity symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Unit of the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Unrounded value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl SolveReport {
    /// Builds a report from a solver outcome
    #[must_use]
    pub fn new(calculator: &Calculator, result: &FormulaResult<Solution>) -> Self {
        let readout = electrocalc::core::render(result);
        match result {
            Ok(solution) => Self {
                calculator: calculator.slug.to_string(),
                ok: true,
                readout,
                quantity: Some(solution.quantity.name().to_string()),
                symbol: Some(solution.quantity.symbol().to_string()),
                unit: Some(solution.quantity.unit().to_string()),
                value: Some(solution.value),
            },
            Err(_) => Self {
                calculator: calculator.slug.to_string(),
                ok: false,
                readout,
                quantity: None,
                symbol: None,
                unit: None,
                value: None,
            },
        }
    }
}

/// One row of `list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorEntry {
    /// Sidebar label
    pub name: String,
    /// Command-line identifier
    pub slug: String,
    /// Formula hint
    pub hint: String,
    /// Field labels in order
    pub fields: Vec<String>,
}

impl From<&Calculator> for CalculatorEntry {
    fn from(calc: &Calculator) -> Self {
        Self {
            name: calc.name.to_string(),
            slug: calc.slug.to_string(),
            hint: calc.hint.to_string(),
            fields: calc.fields.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Renders a solve report in the given format
///
/// Text is the bare readout; JSON is pretty-printed.
pub fn render_solve(report: &SolveReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(report.readout.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Renders the calculator list in the given format
pub fn render_list(entries: &[CalculatorEntry], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                out.push_str(&format!(
                    "{:<22}{:<18}{}\n",
                    entry.name, entry.slug, entry.hint
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

/// Writes results to stdout and diagnostics to stderr
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a successful readout; shown even in quiet mode
    pub fn solution(&self, readout: &str) {
        let line = if self.use_color {
            style(readout).green().bold().to_string()
        } else {
            readout.to_string()
        };
        let _ = self.out.write_line(&line);
    }

    /// Print raw text to stdout
    pub fn plain(&self, text: &str) {
        let _ = self.out.write_str(text);
    }

    /// Print a dimmed note to stderr
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = if self.use_color {
            style(message).dim().to_string()
        } else {
            message.to_string()
        };
        let _ = self.err.write_line(&line);
    }
}
