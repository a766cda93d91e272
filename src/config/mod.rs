//! Calculator configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! history_capacity = 15
//! precision = 10
//! infinity_symbol = "∞"
//! error_sentinel = "Error"
//! empty_display = "0"
//! ```

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::eval::{Sign, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

pub mod error;
pub mod rules;

pub use error::{ConfigError, ConfigViolation};

/// Tunables for a calculator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    /// Decimal places results are rounded to.
    pub precision: u32,
    /// Shown for positive infinity; negative infinity gets a leading `-`.
    pub infinity_symbol: String,
    /// Shown when evaluation fails.
    pub error_sentinel: String,
    /// Shown in the result area when there is nothing else to show.
    pub empty_display: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
            infinity_symbol: "∞".to_string(),
            error_sentinel: "Error".to_string(),
            empty_display: "0".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded calculator config");
        Self::from_toml_str(&source)
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        rules::validate(self)
    }

    /// Return `self` if every rule holds.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Display text for an infinite result.
    pub fn infinity_sentinel(&self, sign: Sign) -> String {
        match sign {
            Sign::Positive => self.infinity_symbol.clone(),
            Sign::Negative => format!("-{}", self.infinity_symbol),
        }
    }
}
