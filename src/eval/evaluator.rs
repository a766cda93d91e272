//! Normalize, parse and evaluate a calculator expression.

use super::error::EvalError;
use super::lexer::tokenize;
use super::normalize::normalize;
use super::parser::Parser;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Decimal places kept by default.
pub const DEFAULT_PRECISION: u32 = 10;

/// Direction of an infinite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

/// Successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A finite value, already rounded to the evaluator's precision.
    Finite(f64),
    /// Division of a non-zero value by zero, or overflow.
    Infinite(Sign),
}

/// Pure expression evaluator.
///
/// Holds only the rounding precision; it has no access to calculator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    precision: u32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl Evaluator {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Evaluate calculator notation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::eval::{Evaluator, Outcome, Sign};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.evaluate("2^3"), Ok(Outcome::Finite(8.0)));
    /// assert_eq!(evaluator.evaluate("1/0"), Ok(Outcome::Infinite(Sign::Positive)));
    /// assert!(evaluator.evaluate("0/0").is_err());
    /// ```
    pub fn evaluate(&self, expr: &str) -> Result<Outcome, EvalError> {
        reject_namespace(expr)?;
        let normalized = normalize(expr);
        trace!(input = expr, normalized = %normalized, "normalized expression");

        let tokens = tokenize(&normalized)?;
        let tree = Parser::new(&tokens).parse()?;
        let value = tree.eval();

        if value.is_nan() {
            return Err(EvalError::Indeterminate);
        }
        if value.is_infinite() {
            let sign = if value.is_sign_positive() {
                Sign::Positive
            } else {
                Sign::Negative
            };
            return Ok(Outcome::Infinite(sign));
        }

        Ok(Outcome::Finite(round_to(value, self.precision)))
    }
}

/// The `math::` namespace only exists after normalization; calculator
/// notation never contains `:`.
fn reject_namespace(expr: &str) -> Result<(), EvalError> {
    match expr.chars().position(|c| c == ':') {
        Some(position) => Err(EvalError::UnexpectedChar {
            found: ':',
            position,
        }),
        None => Ok(()),
    }
}

/// Evaluate with the default precision.
pub fn evaluate(expr: &str) -> Result<Outcome, EvalError> {
    Evaluator::default().evaluate(expr)
}

/// Round half away from zero at `precision` decimal places.
///
/// Values too large to scale already carry no fractional digits at that
/// precision and are returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render a finite value as the shortest decimal string, never in exponent form.
///
/// Integral values have no trailing `.0`; negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
