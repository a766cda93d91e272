//! The calculator: buffer, committed result and history in one explicit value.
//!
//! Every transition is pure. `apply` returns the next calculator and leaves
//! the current one untouched; `dispatch` is the in-place convenience for a
//! single owner driving the machine from UI events.

use crate::config::CalculatorConfig;
use crate::core::{phase_of, DisplayResult, HistoryEntry, HistoryLog, Phase};
use crate::eval::{format_number, Evaluator, Outcome};
use crate::machine::command::Command;
use crate::machine::render::View;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    config: CalculatorConfig,
    evaluator: Evaluator,
    buffer: String,
    display: Option<DisplayResult>,
    history: HistoryLog,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_config(CalculatorConfig::default())
    }
}

impl Calculator {
    /// Calculator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator using an already validated configuration.
    ///
    /// Use [`crate::builder::CalculatorBuilder`] to validate on the way in.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.precision),
            history: HistoryLog::with_capacity(config.history_capacity),
            buffer: String::new(),
            display: None,
            config,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn display(&self) -> Option<&DisplayResult> {
        self.display.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        phase_of(self.display.as_ref())
    }

    /// Text of the result area, if a result is committed.
    pub fn display_text(&self) -> Option<String> {
        self.display.as_ref().map(|display| match display {
            DisplayResult::Value(value) => value.clone(),
            DisplayResult::Infinity(sign) => self.config.infinity_sentinel(*sign),
            DisplayResult::Error => self.config.error_sentinel.clone(),
        })
    }

    /// Run one command, returning the next calculator.
    pub fn apply(&self, command: &Command) -> Self {
        let next = match command {
            Command::Append(token) => self.append(token),
            Command::WrapFunction(name) => self.wrap_function(name),
            Command::DeleteLast => self.delete_last(),
            Command::ResetAll => self.reset_all(),
            Command::Evaluate => self.evaluate(),
        };
        debug!(
            command = command.name(),
            phase = next.phase().name(),
            buffer = %next.buffer,
            "applied command"
        );
        next
    }

    /// Run one command in place.
    pub fn dispatch(&mut self, command: &Command) {
        *self = self.apply(command);
    }

    /// Snapshot for the render step.
    pub fn render(&self) -> View {
        View::of(self)
    }

    /// Append a token verbatim and return to editing.
    pub fn append(&self, token: &str) -> Self {
        let mut buffer = self.buffer.clone();
        buffer.push_str(token);
        self.editing(buffer)
    }

    /// Append `name(` and return to editing.
    pub fn wrap_function(&self, name: &str) -> Self {
        self.append(&format!("{}(", name))
    }

    /// Drop the final character; clears any result even when the buffer is empty.
    pub fn delete_last(&self) -> Self {
        let mut buffer = self.buffer.clone();
        buffer.pop();
        self.editing(buffer)
    }

    pub fn reset_all(&self) -> Self {
        self.editing(String::new())
    }

    /// Evaluate the buffer.
    ///
    /// - empty buffer: no change at all
    /// - finite value: recorded in history and becomes the new buffer
    /// - infinity: recorded in history, buffer keeps the expression
    /// - failure: error shown, buffer and history untouched
    pub fn evaluate(&self) -> Self {
        if self.buffer.is_empty() {
            return self.clone();
        }

        match self.evaluator.evaluate(&self.buffer) {
            Ok(Outcome::Finite(value)) => {
                let text = format_number(value);
                Self {
                    history: self
                        .history
                        .record(HistoryEntry::new(self.buffer.clone(), text.clone())),
                    buffer: text.clone(),
                    display: Some(DisplayResult::Value(text)),
                    ..self.clone()
                }
            }
            // The buffer keeps the expression here, unlike the finite case.
            Ok(Outcome::Infinite(sign)) => {
                let sentinel = self.config.infinity_sentinel(sign);
                Self {
                    history: self
                        .history
                        .record(HistoryEntry::new(self.buffer.clone(), sentinel)),
                    display: Some(DisplayResult::Infinity(sign)),
                    ..self.clone()
                }
            }
            Err(err) => {
                debug!(kind = ?err.kind(), error = %err, "evaluation failed");
                Self {
                    display: Some(DisplayResult::Error),
                    ..self.clone()
                }
            }
        }
    }

    fn editing(&self, buffer: String) -> Self {
        Self {
            buffer,
            display: None,
            ..self.clone()
        }
    }
}
