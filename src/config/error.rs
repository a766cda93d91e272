//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule broken by a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("history_capacity must be between 1 and {max} (got {value})")]
    HistoryCapacityOutOfRange { value: usize, max: usize },

    #[error("precision must be at most {max} decimal places (got {value})")]
    PrecisionTooLarge { value: u32, max: u32 },

    #[error("{field} must not be empty")]
    EmptySentinel { field: &'static str },

    #[error("error_sentinel '{0}' would be indistinguishable from a number")]
    NumericErrorSentinel(String),
}

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
