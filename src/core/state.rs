//! Calculator phases and the value shown in the result area.
//!
//! The phase is derived from the display slot rather than stored next to it,
//! so "editing with a result shown" cannot be represented.

use crate::eval::Sign;
use serde::{Deserialize, Serialize};

/// Position of the calculator in its input state machine.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Phase;
///
/// assert_eq!(Phase::Editing.name(), "Editing");
/// assert!(Phase::Errored.is_error());
/// assert!(!Phase::Resulted.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// The buffer is live; no result is shown.
    Editing,
    /// A value or infinity was committed by the last evaluation.
    Resulted,
    /// The last evaluation failed.
    Errored,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Editing => "Editing",
            Self::Resulted => "Resulted",
            Self::Errored => "Errored",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Errored)
    }
}

/// Committed evaluation result, cleared by any edit.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum DisplayResult {
    /// Rounded numeric result, already formatted.
    Value(String),
    /// Infinite result.
    Infinity(Sign),
    /// Evaluation failed; rendered as the error sentinel.
    Error,
}

impl DisplayResult {
    /// The phase this result puts the calculator in.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Value(_) | Self::Infinity(_) => Phase::Resulted,
            Self::Error => Phase::Errored,
        }
    }
}

/// Phase implied by an optional display result.
pub fn phase_of(display: Option<&DisplayResult>) -> Phase {
    display.map_or(Phase::Editing, DisplayResult::phase)
}
