//! Core calculator data.
//!
//! - Phases of the input state machine and the committed display result
//! - Immutable, capacity-bounded evaluation history
//!
//! Nothing in this module performs I/O.

mod history;
mod state;

pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use state::{phase_of, DisplayResult, Phase};
