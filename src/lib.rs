//! Keycalc: a headless scientific calculator core
//!
//! Keycalc follows a "pure core, imperative shell" layout. The calculator is
//! an explicit value: every key press is a pure transition from one
//! calculator to the next, and rendering is a separate step that reads it.
//! Nothing here touches a screen, so the whole state machine is testable
//! without one.
//!
//! # Core Concepts
//!
//! - **Buffer**: the expression being typed, in calculator notation (`√(2)`, `π`, `2^3`)
//! - **Normalization**: rewriting that notation into a closed grammar
//! - **Evaluation**: a recursive-descent parser over that grammar; no code
//!   execution is reachable from user input
//! - **History**: the last 15 successful evaluations, newest first
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::Phase;
//! use keycalc::machine::{Calculator, Command};
//!
//! let mut calculator = Calculator::new();
//! for command in [
//!     Command::append("2"),
//!     Command::append("+"),
//!     Command::append("2"),
//!     Command::Evaluate,
//! ] {
//!     calculator.dispatch(&command);
//! }
//!
//! assert_eq!(calculator.phase(), Phase::Resulted);
//! assert_eq!(calculator.buffer(), "4");
//! assert_eq!(calculator.history().entries()[0].expression(), "2+2");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod eval;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use core::{HistoryEntry, HistoryLog, Phase};
pub use eval::{evaluate, EvalError, Outcome};
pub use machine::{Calculator, Command, View};
