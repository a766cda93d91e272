//! Keyboard bindings and the key-script format used by the CLI shell.

use crate::machine::Command;
use thiserror::Error;

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// Decode a key press. Unbound keys produce `None`.
///
/// Letters are mnemonics: `s` sin, `c` cos, `t` tan, `l` log, `n` ln,
/// `r` square root, `p` pi, `e` Euler's number.
///
/// # Example
///
/// ```rust
/// use keycalc::input::{command_for_key, Key};
/// use keycalc::machine::Command;
///
/// assert_eq!(command_for_key(Key::Char(',')), Some(Command::append(".")));
/// assert_eq!(command_for_key(Key::Char('s')), Some(Command::wrap("sin")));
/// assert_eq!(command_for_key(Key::Enter), Some(Command::Evaluate));
/// ```
pub fn command_for_key(key: Key) -> Option<Command> {
    let c = match key {
        Key::Enter => return Some(Command::Evaluate),
        Key::Backspace => return Some(Command::DeleteLast),
        Key::Escape => return Some(Command::ResetAll),
        Key::Char(c) => c,
    };

    let command = match c {
        '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '^' => Command::append(c.to_string()),
        '.' | ',' => Command::append("."),
        '=' => Command::Evaluate,
        's' => Command::wrap("sin"),
        'c' => Command::wrap("cos"),
        't' => Command::wrap("tan"),
        'l' => Command::wrap("log"),
        'n' => Command::wrap("ln"),
        'r' => Command::append("√("),
        'p' => Command::append("π"),
        'e' => Command::append("e"),
        _ => return None,
    };
    Some(command)
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyScriptError {
    #[error("Unknown key name '{{{0}}}'")]
    UnknownKey(String),

    #[error("Unterminated key name starting at position {0}")]
    Unterminated(usize),
}

/// One line of keyboard input.
///
/// Characters are individual key presses; `{enter}`, `{backspace}` and
/// `{escape}` name special keys. A line is submitted (implicit Enter) unless
/// it ends with `{hold}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyScript {
    pub keys: Vec<Key>,
    pub submit: bool,
}

impl KeyScript {
    pub fn parse(line: &str) -> Result<Self, KeyScriptError> {
        let (body, submit) = match line.trim_end().strip_suffix("{hold}") {
            Some(rest) => (rest, false),
            None => (line, true),
        };

        let mut keys = Vec::new();
        let mut chars = body.char_indices();
        while let Some((start, c)) = chars.next() {
            if c != '{' {
                keys.push(Key::Char(c));
                continue;
            }

            let mut name = String::new();
            let mut closed = false;
            for (_, c) in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                return Err(KeyScriptError::Unterminated(start));
            }

            keys.push(match name.as_str() {
                "enter" => Key::Enter,
                "backspace" | "bs" => Key::Backspace,
                "escape" | "esc" => Key::Escape,
                _ => return Err(KeyScriptError::UnknownKey(name)),
            });
        }

        Ok(Self { keys, submit })
    }

    /// Commands for this line, including the trailing Enter when submitted.
    pub fn commands(&self) -> Vec<Command> {
        let trailer = self.submit.then_some(Key::Enter);
        self.keys
            .iter()
            .copied()
            .chain(trailer)
            .filter_map(command_for_key)
            .collect()
    }
}
