//! Builder API for constructing calculators.
//!
//! Settings are validated as a whole when `build` is called, so a single
//! error lists every problem.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
