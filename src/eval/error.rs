//! Evaluation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of evaluation failures.
///
/// The display layer collapses every kind into a single sentinel; the kind
/// is kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed expression, unbalanced parentheses or unknown token.
    Syntax,
    /// The expression produced NaN (e.g. `0/0`).
    Indeterminate,
    /// Nothing to evaluate.
    EmptyInput,
}

/// Errors that can occur while normalizing, parsing or evaluating an expression.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Expression is empty")]
    EmptyInput,

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("Malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("Unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Expression nested deeper than {max} levels")]
    TooDeep { max: usize },

    #[error("Result is not a number")]
    Indeterminate,
}

impl EvalError {
    /// Classify this error into the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::Indeterminate => ErrorKind::Indeterminate,
            _ => ErrorKind::Syntax,
        }
    }
}
