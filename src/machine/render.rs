//! Render step: a plain, serializable snapshot of what the UI shows.

use crate::core::{HistoryEntry, Phase};
use crate::machine::calculator::Calculator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryRow {
    pub id: Uuid,
    pub expression: String,
    pub result: String,
    pub evaluated_at: DateTime<Utc>,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id(),
            expression: entry.expression().to_string(),
            result: entry.result().to_string(),
            evaluated_at: entry.evaluated_at(),
        }
    }
}

/// Everything a front end needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct View {
    /// The buffer as typed.
    pub expression: String,
    /// Committed result, else the live buffer, else the empty placeholder.
    pub result: String,
    pub phase: Phase,
    /// Newest first.
    pub history: Vec<HistoryRow>,
}

impl View {
    pub fn of(calculator: &Calculator) -> Self {
        let result = calculator.display_text().unwrap_or_else(|| {
            if calculator.buffer().is_empty() {
                calculator.config().empty_display.clone()
            } else {
                calculator.buffer().to_string()
            }
        });

        Self {
            expression: calculator.buffer().to_string(),
            result,
            phase: calculator.phase(),
            history: calculator
                .history()
                .entries()
                .iter()
                .map(HistoryRow::from)
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.expression)?;
        writeln!(f, "= {}", self.result)?;
        for row in &self.history {
            writeln!(f, "  {} = {}", row.expression, row.result)?;
        }
        Ok(())
    }
}
