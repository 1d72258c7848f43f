//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// JSON output could not be produced
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The calculator answered with a message instead of a result
    #[error("{message}")]
    Evaluation {
        /// Readout text
        message: String,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an evaluation error
    #[must_use]
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad filter");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad filter"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("unknown calculator");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_evaluation_error_is_readout() {
        let err = CliError::evaluation("Enter all three values.");
        assert_eq!(err.to_string(), "Enter all three values.");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("Serialization failed"));
    }

    #[test]
    fn test_error_debug() {
        let err = CliError::config("test");
        assert!(format!("{err:?}").contains("Config"));
    }
}
