//! Commands accepted by the calculator state machine.

use serde::{Deserialize, Serialize};

/// One user intent, already decoded from a button or key press.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Append a token verbatim (digit, operator, `.`, parenthesis, `π`, `e`, `√(`, `^`).
    Append(String),
    /// Append `name(`.
    WrapFunction(String),
    /// Remove the final character.
    DeleteLast,
    /// Clear buffer, result and error.
    ResetAll,
    /// Evaluate the buffer.
    Evaluate,
}

impl Command {
    pub fn append(token: impl Into<String>) -> Self {
        Self::Append(token.into())
    }

    pub fn wrap(name: impl Into<String>) -> Self {
        Self::WrapFunction(name.into())
    }

    /// Name for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Append(_) => "append",
            Self::WrapFunction(_) => "wrap_function",
            Self::DeleteLast => "delete_last",
            Self::ResetAll => "reset_all",
            Self::Evaluate => "evaluate",
        }
    }
}
