//! The input state machine and its render step.
//!
//! This is the "imperative shell" boundary: UI events become [`Command`]s,
//! [`Calculator::apply`] turns a calculator plus a command into the next
//! calculator, and [`View`] is what gets drawn.

mod calculator;
mod command;
mod render;

pub use calculator::Calculator;
pub use command::Command;
pub use render::{HistoryRow, View};
