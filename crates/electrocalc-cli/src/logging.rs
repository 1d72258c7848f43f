//! Log subscriber setup
//!
//! Logs go to `--log-file` when given. Without one they go to stderr, except
//! while the TUI owns the terminal, where nothing is installed.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log lines end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Nothing is installed
    Disabled,
    /// Standard error
    Stderr,
    /// The configured log file
    File,
}

/// Picks the sink for a run; `interactive` is true while the TUI runs
#[must_use]
pub fn sink_for(config: &CliConfig, interactive: bool) -> LogSink {
    match (&config.log_file, interactive) {
        (Some(_), _) => LogSink::File,
        (None, true) => LogSink::Disabled,
        (None, false) => LogSink::Stderr,
    }
}

/// Parses the effective filter directive
pub fn build_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    let directive = config.filter_directive();
    EnvFilter::try_new(directive)
        .map_err(|e| CliError::config(format!("invalid log filter '{directive}': {e}")))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, interactive: bool) -> CliResult<LogSink> {
    let sink = sink_for(config, interactive);
    let filter = build_filter(config)?;

    match (sink, &config.log_file) {
        (LogSink::File, Some(path)) => {
            let file = File::create(path)?;
            install(filter, Mutex::new(file), false, config.log_json)?;
        }
        (LogSink::Stderr, _) => {
            install(
                filter,
                std::io::stderr,
                config.color.should_color(),
                config.log_json,
            )?;
        }
        _ => {}
    }

    Ok(sink)
}

fn install<W>(filter: EnvFilter, writer: W, ansi: bool, json: bool) -> CliResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(ansi).try_init()
    };
    result.map_err(|e| CliError::config(format!("failed to install logger: {e}")))
}
