//! Calculator notation normalization.
//!
//! The keypad produces strings such as `2π`, `√(9)` or `log(100)^2`.
//! Normalization rewrites them into the closed grammar understood by the
//! parser. The rewrite is a fixed, order-sensitive sequence of textual
//! substitutions applied to a copy of the input.

use lazy_static::lazy_static;
use regex::Regex;

/// Namespace prefix for every intrinsic the parser knows about.
pub const INTRINSIC_PREFIX: &str = "math::";

/// Symbol the keypad uses for pi.
pub const PI_SYMBOL: char = 'π';

/// Symbol the keypad uses for the square root.
pub const SQRT_SYMBOL: char = '√';

lazy_static! {
    /// A lowercase `e` that is not part of a longer word or number.
    static ref EULER: Regex = Regex::new(r"\be\b").unwrap();

    /// `base^exponent` where base is digits or `)` and exponent is digits or `(`.
    static ref POWER: Regex = Regex::new(r"([0-9]+|\))\^([0-9]+|\()").unwrap();
}

/// Ordered literal substitutions for function calls.
///
/// `ln(` and `log(` are disjoint patterns; neither output contains the other.
const FUNCTION_CALLS: &[(&str, &str)] = &[
    ("sin(", "math::sin("),
    ("cos(", "math::cos("),
    ("tan(", "math::tan("),
    ("log(", "math::log10("),
    ("ln(", "math::ln("),
];

/// Rewrite calculator notation into the evaluator's grammar.
///
/// This is a pure function; the caller's buffer is never touched.
///
/// # Example
///
/// ```rust
/// use keycalc::eval::normalize;
///
/// assert_eq!(normalize("2^3"), "2**3");
/// assert_eq!(normalize("√(9)"), "math::sqrt(9)");
/// assert_eq!(normalize("ln(e)"), "math::ln((math::E))");
/// ```
pub fn normalize(expr: &str) -> String {
    let mut normalized = expr.replace(PI_SYMBOL, "(math::PI)");

    normalized = EULER.replace_all(&normalized, "(math::E)").into_owned();

    for (pattern, replacement) in FUNCTION_CALLS {
        normalized = normalized.replace(pattern, replacement);
    }

    normalized = normalized.replace("√(", "math::sqrt(");
    normalized = normalized.replace(SQRT_SYMBOL, "math::sqrt ");

    // Single leftmost pass; `2^3^2` leaves the second caret untouched.
    POWER.replace_all(&normalized, "${1}**${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_pi_with_parenthesized_constant() {
        assert_eq!(normalize("π"), "(math::PI)");
        assert_eq!(normalize("2*π"), "2*(math::PI)");
    }

    #[test]
    fn replaces_only_standalone_e() {
        assert_eq!(normalize("e"), "(math::E)");
        assert_eq!(normalize("e+1"), "(math::E)+1");
        assert_eq!(normalize("1e5"), "1e5");
        assert_eq!(normalize("e2"), "e2");
    }

    #[test]
    fn rewrites_trigonometric_calls() {
        assert_eq!(normalize("sin(0)"), "math::sin(0)");
        assert_eq!(normalize("cos(1)+tan(2)"), "math::cos(1)+math::tan(2)");
    }

    #[test]
    fn keeps_log_and_ln_distinct() {
        assert_eq!(normalize("log(100)"), "math::log10(100)");
        assert_eq!(normalize("ln(2)"), "math::ln(2)");
        assert_eq!(normalize("log(ln(2))"), "math::log10(math::ln(2))");
    }

    #[test]
    fn rewrites_square_roots() {
        assert_eq!(normalize("√(9)"), "math::sqrt(9)");
        assert_eq!(normalize("√9"), "math::sqrt 9");
    }

    #[test]
    fn rewrites_power_in_a_single_pass() {
        assert_eq!(normalize("2^3"), "2**3");
        assert_eq!(normalize("(1+1)^(2)"), "(1+1)**(2)");
        assert_eq!(normalize("π^2"), "(math::PI)**2");
        assert_eq!(normalize("2^3^2"), "2**3^2");
        assert_eq!(normalize("2^-1"), "2^-1");
    }

    #[test]
    fn leaves_plain_arithmetic_alone() {
        assert_eq!(normalize("1+2*3/4-5"), "1+2*3/4-5");
        assert_eq!(normalize(""), "");
    }
}
