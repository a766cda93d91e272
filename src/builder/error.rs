//! Build errors for the calculator builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid calculator configuration ({} violation(s)): {}", .0.len(), describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

impl BuildError {
    /// Every violation found, in rule order.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfig(violations) => violations,
        }
    }
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
