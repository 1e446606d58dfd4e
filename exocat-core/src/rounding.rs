//! Significant-figure policy for derived values.
//!
//! Two pieces live here:
//!
//! - [`ErrorSynthesizer`] invents an error for a value the catalog recorded
//!   without one, from the decimal precision the value was written with.
//! - [`Rounder`] trims an error to one or two significant figures (two when
//!   its leading digit is 1 or 2, one otherwise) and a value to the decimal
//!   order of its error's last significant digit.
//!
//! Neither raises: zero, undefined or non-finite inputs are passed through.
//!
//! | Error | Leading digit | Rounded | Value `12.3456` becomes |
//! |-------|---------------|---------|-------------------------|
//! | `0.0347` | 3 | `0.03` | `12.35` |
//! | `0.0251` | 2 | `0.025` | `12.346` |
//! | `1.96` | 1 | `2.0` | `12.3` |

use crate::math::{order_of_magnitude, pow10, round_to_order};
use crate::measure::{Measure, Quantity};

/// Guards the leading-digit test against `0.3 / 0.1 == 2.9999999999999996`.
const LEADING_DIGIT_EPS: f64 = 1e-9;

/// Produces an error for a value that has none.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ErrorSynthesizer {
    /// `5 × 10^order`, `order` taken from how many digits the value carries.
    #[default]
    Precision,
    /// Always the same error, whatever the value.
    Constant(f64),
}

impl ErrorSynthesizer {
    pub fn constant(err: f64) -> Self {
        Self::Constant(err.abs())
    }

    /// Synthesized error for `val`, or `None` when `val` is not finite.
    pub fn gen(&self, val: f64) -> Option<f64> {
        if !val.is_finite() {
            return None;
        }
        match self {
            Self::Precision => Some(5.0 * pow10(precision_order(val))),
            Self::Constant(err) => Some(err.abs()),
        }
    }
}

/// Decimal order of the precision `val` was written with.
///
/// Catalog values are floats, so an integer-valued `val` reads as `"<n>.0"`
/// and sits at order -1. Otherwise the shortest decimal string that
/// round-trips to `val` gives `-(digits after the point)`.
pub fn precision_order(val: f64) -> i32 {
    let repr = format!("{}", val.abs());
    match repr.split_once('.') {
        Some((_, frac)) => -(frac.len() as i32),
        None => -1,
    }
}

/// Decimal order of the last digit kept when `err` is rounded.
fn significant_order(err: f64) -> Option<i32> {
    let order = order_of_magnitude(err)?;
    let normalized = if order < 0 {
        err.abs() * pow10(-order)
    } else {
        err.abs() / pow10(order)
    };
    let leading = (normalized + LEADING_DIGIT_EPS).trunc() as i64;
    if leading > 2 {
        Some(order)
    } else {
        Some(order - 1)
    }
}

/// Rounds errors and values to matching precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rounder;

impl Rounder {
    pub fn new() -> Self {
        Self
    }

    /// Rounds `err` to one significant figure, or two when it leads with 1 or 2.
    pub fn round_err(&self, err: f64) -> f64 {
        self.round_err_with_order(err).map_or(err, |(rounded, _)| rounded)
    }

    /// Rounded `err` and the decimal order of its last kept digit.
    ///
    /// The order is fixed before rounding, so a carry (`2.96` to `3.0`) keeps
    /// the digit count the unrounded error called for.
    pub fn round_err_with_order(&self, err: f64) -> Option<(f64, i32)> {
        let order = significant_order(err)?;
        Some((round_to_order(err, order), order))
    }

    /// Rounds `val` to the decimal order `err` is rounded at.
    ///
    /// `err` is the error as measured, before [`round_err`](Self::round_err).
    pub fn round_val(&self, val: f64, err: f64) -> f64 {
        match significant_order(err) {
            Some(order) => self.round_val_to_order(val, order),
            None => val,
        }
    }

    fn round_val_to_order(&self, val: f64, order: i32) -> f64 {
        if !val.is_finite() {
            return val;
        }
        round_to_order(val, order)
    }

    /// Rounds both bounds independently, then the value to the finer of them.
    pub fn round_measure<Q: Quantity>(&self, measure: &Measure<Q>) -> Measure<Q> {
        let min = measure.err_min().map(|e| (e, self.round_err_with_order(e)));
        let max = measure.err_max().map(|e| (e, self.round_err_with_order(e)));

        let finest = [min, max]
            .into_iter()
            .flatten()
            .filter_map(|(_, rounded)| rounded.map(|(_, order)| order))
            .min();

        let val = match (measure.val(), finest) {
            (Some(val), Some(order)) => Some(self.round_val_to_order(val, order)),
            (val, _) => val,
        };

        let err = |bound: Option<(f64, Option<(f64, i32)>)>| {
            bound.map(|(raw, rounded)| rounded.map_or(raw, |(e, _)| e))
        };
        Measure::new(val, err(min), err(max))
    }
}
