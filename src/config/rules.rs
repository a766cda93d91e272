//! Configuration rules, checked with `Validation` so every violation is
//! reported at once instead of one per run.

use super::error::ConfigViolation;
use super::CalculatorConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest accepted history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// Largest accepted rounding precision; beyond this f64 has no digits left.
pub const MAX_PRECISION: u32 = 15;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn history_capacity(config: &CalculatorConfig) -> Check {
    let value = config.history_capacity;
    if (1..=MAX_HISTORY_CAPACITY).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::HistoryCapacityOutOfRange {
            value,
            max: MAX_HISTORY_CAPACITY,
        })
    }
}

fn precision(config: &CalculatorConfig) -> Check {
    if config.precision <= MAX_PRECISION {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::PrecisionTooLarge {
            value: config.precision,
            max: MAX_PRECISION,
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> Check {
    if value.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptySentinel { field })
    } else {
        Validation::success(())
    }
}

fn error_sentinel_not_numeric(config: &CalculatorConfig) -> Check {
    if config.error_sentinel.trim().parse::<f64>().is_ok() {
        Validation::fail(ConfigViolation::NumericErrorSentinel(
            config.error_sentinel.clone(),
        ))
    } else {
        Validation::success(())
    }
}

/// Run every rule, accumulating ALL violations.
pub fn validate(config: &CalculatorConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let checks = vec![
        history_capacity(config),
        precision(config),
        non_empty("infinity_symbol", &config.infinity_symbol),
        non_empty("error_sentinel", &config.error_sentinel),
        non_empty("empty_display", &config.empty_display),
        error_sentinel_not_numeric(config),
    ];

    Validation::all_vec(checks).map(|_| ())
}
