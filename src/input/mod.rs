//! Decoding UI events into calculator commands.
//!
//! - Keypad buttons carrying `value`, `op`, `fn` or `action` attributes
//! - Keyboard keys, including single-letter function mnemonics

mod keyboard;
mod keypad;

pub use keyboard::{command_for_key, Key, KeyScript, KeyScriptError};
pub use keypad::{Action, KeypadButton, UnknownAction};
