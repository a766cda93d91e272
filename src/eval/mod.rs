//! Expression normalization and evaluation.
//!
//! Calculator notation (`π`, `√`, `^`, `sin(`, `log(`, ...) is first rewritten
//! into a closed grammar, then tokenized, parsed by a recursive-descent parser
//! and evaluated. No user input ever reaches anything but this grammar.
//!
//! Everything here is a pure function of the input string.

mod error;
mod evaluator;
pub mod lexer;
mod normalize;
pub mod parser;

pub use error::{ErrorKind, EvalError};
pub use evaluator::{
    evaluate, format_number, round_to, Evaluator, Outcome, Sign, DEFAULT_PRECISION,
};
pub use normalize::{normalize, INTRINSIC_PREFIX, PI_SYMBOL, SQRT_SYMBOL};
