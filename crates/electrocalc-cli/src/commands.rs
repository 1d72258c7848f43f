//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// Electrocalc: Ohm's Law, voltage divider and parallel resistance calculator
#[derive(Parser, Debug)]
#[command(name = "electrocalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format for solve and list
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Write logs to this file (the only log sink while the TUI runs)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "electrocalc=trace"
    #[arg(long, global = true, env = "ELECTROCALC_LOG", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal calculator
    Tui(TuiArgs),

    /// Solve one calculator from command-line values
    Solve(SolveArgs),

    /// List the available calculators
    List,
}

/// Arguments for the tui command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TuiArgs {
    /// Calculator shown at startup (slug or name)
    #[arg(short, long, default_value = "ohms-law")]
    pub calculator: String,
}

impl Default for TuiArgs {
    fn default() -> Self {
        Self {
            calculator: "ohms-law".to_string(),
        }
    }
}

/// Arguments for the solve command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SolveArgs {
    /// Calculator to run
    #[command(subcommand)]
    pub calculator: SolveCommand,
}

/// One subcommand per calculator; values are passed through as typed
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SolveCommand {
    /// V = I × R; give exactly two of the three
    OhmsLaw {
        /// Voltage in volts
        #[arg(long, allow_hyphen_values = true)]
        voltage: Option<String>,
        /// Current in amperes
        #[arg(long, allow_hyphen_values = true)]
        current: Option<String>,
        /// Resistance in ohms
        #[arg(long, allow_hyphen_values = true)]
        resistance: Option<String>,
    },

    /// Vout = Vin × R2 / (R1 + R2)
    VoltageDivider {
        /// Input voltage in volts
        #[arg(long, allow_hyphen_values = true)]
        vin: Option<String>,
        /// Upper resistor in ohms
        #[arg(long, allow_hyphen_values = true)]
        r1: Option<String>,
        /// Lower resistor in ohms
        #[arg(long, allow_hyphen_values = true)]
        r2: Option<String>,
    },

    /// 1 / Rtotal = Σ 1 / Ri
    Parallel {
        /// Comma-separated resistor values, e.g. "100, 220, 330"
        #[arg(allow_hyphen_values = true, default_value = "")]
        values: String,
    },
}

impl SolveCommand {
    /// Registry slug of the selected calculator
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::OhmsLaw { .. } => "ohms-law",
            Self::VoltageDivider { .. } => "voltage-divider",
            Self::Parallel { .. } => "parallel",
        }
    }

    /// Field texts in solver order; omitted options become empty fields
    #[must_use]
    pub fn inputs(&self) -> Vec<&str> {
        fn text(value: Option<&String>) -> &str {
            value.map_or("", String::as_str)
        }
        match self {
            Self::OhmsLaw {
                voltage,
                current,
                resistance,
            } => vec![
                text(voltage.as_ref()),
                text(current.as_ref()),
                text(resistance.as_ref()),
            ],
            Self::VoltageDivider { vin, r1, r2 } => {
                vec![text(vin.as_ref()), text(r1.as_ref()), text(r2.as_ref())]
            }
            Self::Parallel { values } => vec![values.as_str()],
        }
    }
}

/// Color argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
