//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::machine::Calculator;
use stillwater::validation::Validation;

/// Builder for constructing a calculator with a fluent API.
///
/// Every setter is optional; unset fields keep their defaults.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::CalculatorBuilder;
///
/// let calculator = CalculatorBuilder::new()
///     .history_capacity(5)
///     .precision(4)
///     .build()
///     .unwrap();
///
/// let calculator = calculator.append("10/3").evaluate();
/// assert_eq!(calculator.buffer(), "3.3333");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum history entries kept.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Decimal places results are rounded to.
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn infinity_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.infinity_symbol = symbol.into();
        self
    }

    pub fn error_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.error_sentinel = sentinel.into();
        self
    }

    pub fn empty_display(mut self, placeholder: impl Into<String>) -> Self {
        self.config.empty_display = placeholder.into();
        self
    }

    /// Build the calculator.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(Calculator::with_config(self.config)),
            Validation::Failure(errors) => {
                Err(BuildError::InvalidConfig(errors.iter().cloned().collect()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::core::Phase;

    #[test]
    fn default_builder_matches_default_calculator() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calculator, Calculator::new());
    }

    #[test]
    fn fluent_api_applies_settings() {
        let calculator = CalculatorBuilder::new()
            .history_capacity(2)
            .infinity_symbol("inf")
            .error_sentinel("ERR")
            .empty_display("-")
            .build()
            .unwrap();

        assert_eq!(calculator.history().capacity(), 2);
        assert_eq!(calculator.render().result, "-");

        let failed = calculator.append("1+").evaluate();
        assert_eq!(failed.phase(), Phase::Errored);
        assert_eq!(failed.render().result, "ERR");
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = CalculatorBuilder::new()
            .history_capacity(0)
            .precision(30)
            .empty_display("")
            .build();

        let err = result.unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err
            .violations()
            .iter()
            .any(|v| matches!(v, ConfigViolation::PrecisionTooLarge { .. })));
        assert!(err.to_string().starts_with("Invalid calculator configuration (3 violation(s))"));
    }

    #[test]
    fn builder_accepts_loaded_config() {
        let config = CalculatorConfig::from_toml_str("history_capacity = 3").unwrap();
        let calculator = CalculatorBuilder::new().config(config).build().unwrap();
        assert_eq!(calculator.history().capacity(), 3);
    }
}
