//! Keypad buttons.
//!
//! A button carries at most one meaningful attribute; they are checked in the
//! order value, operator, function, action.

use crate::machine::Command;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Action tags on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Delete the last character.
    Clear,
    /// Reset everything.
    ClearAll,
    /// Evaluate.
    Equals,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown keypad action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "clear-all" => Ok(Self::ClearAll),
            "equals" => Ok(Self::Equals),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Clear => Command::DeleteLast,
            Action::ClearAll => Command::ResetAll,
            Action::Equals => Command::Evaluate,
        }
    }
}

/// Attributes of a pressed keypad button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadButton {
    pub value: Option<String>,
    pub op: Option<String>,
    #[serde(rename = "fn")]
    pub function: Option<String>,
    pub action: Option<String>,
}

impl KeypadButton {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn op(op: impl Into<String>) -> Self {
        Self {
            op: Some(op.into()),
            ..Self::default()
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self {
            function: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn action(tag: impl Into<String>) -> Self {
        Self {
            action: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Decode the press. Buttons with nothing recognizable produce `None`.
    pub fn command(&self) -> Option<Command> {
        if let Some(value) = &self.value {
            return Some(Command::append(value.as_str()));
        }
        if let Some(op) = &self.op {
            return Some(Command::append(op.as_str()));
        }
        if let Some(name) = &self.function {
            return Some(function_command(name));
        }
        self.action
            .as_deref()
            .and_then(|tag| tag.parse::<Action>().ok())
            .map(Command::from)
    }
}

/// `sqrt`, `pi` and `pow` insert symbols; every other function wraps.
fn function_command(name: &str) -> Command {
    match name {
        "sqrt" => Command::append("√("),
        "pi" => Command::append("π"),
        "pow" => Command::append("^"),
        other => Command::wrap(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_op_append_verbatim() {
        assert_eq!(KeypadButton::value("7").command(), Some(Command::append("7")));
        assert_eq!(KeypadButton::op("*").command(), Some(Command::append("*")));
    }

    #[test]
    fn special_functions_insert_symbols() {
        assert_eq!(
            KeypadButton::function("sqrt").command(),
            Some(Command::append("√("))
        );
        assert_eq!(
            KeypadButton::function("pi").command(),
            Some(Command::append("π"))
        );
        assert_eq!(
            KeypadButton::function("pow").command(),
            Some(Command::append("^"))
        );
        assert_eq!(
            KeypadButton::function("sin").command(),
            Some(Command::wrap("sin"))
        );
    }

    #[test]
    fn actions_map_to_commands() {
        assert_eq!(
            KeypadButton::action("clear").command(),
            Some(Command::DeleteLast)
        );
        assert_eq!(
            KeypadButton::action("clear-all").command(),
            Some(Command::ResetAll)
        );
        assert_eq!(
            KeypadButton::action("equals").command(),
            Some(Command::Evaluate)
        );
        assert_eq!(KeypadButton::action("explode").command(), None);
        assert_eq!(KeypadButton::default().command(), None);
    }

    #[test]
    fn value_takes_priority() {
        let button = KeypadButton {
            value: Some("1".to_string()),
            action: Some("equals".to_string()),
            ..KeypadButton::default()
        };
        assert_eq!(button.command(), Some(Command::append("1")));
    }

    #[test]
    fn deserializes_data_attributes() {
        let button: KeypadButton = serde_json::from_str(r#"{"fn": "log"}"#).unwrap();
        assert_eq!(button.command(), Some(Command::wrap("log")));
        let action: Action = serde_json::from_str(r#""clear-all""#).unwrap();
        assert_eq!(action, Action::ClearAll);
    }
}
