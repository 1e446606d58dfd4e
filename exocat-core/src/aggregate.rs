//! Star-level summaries of planet-level measures.
//!
//! Planets of one system each imply a value for properties of their shared
//! host (a star mass from every orbit, for instance). [`StarAggregator`]
//! folds those into a single measure:
//!
//! - value: arithmetic mean of the defined values;
//! - each bound: `sqrt(Σ errᵢ²) / N`, the quadrature sum divided by the count.
//!
//! The result is rounded with [`Rounder::round_measure`].

use crate::math::sqrt;
use crate::measure::{Measure, Quantity};
use crate::rounding::Rounder;

#[derive(Debug, Clone, Copy, Default)]
pub struct StarAggregator {
    rounder: Rounder,
}

impl StarAggregator {
    pub fn new(rounder: Rounder) -> Self {
        Self { rounder }
    }

    /// Combines `measures` into one.
    ///
    /// Only measures with a defined value take part. A bound is undefined
    /// when any participating measure lacks it. Returns `None` when no
    /// measure has a value.
    pub fn aggregate<Q: Quantity>(&self, measures: &[Measure<Q>]) -> Option<Measure<Q>> {
        let defined: Vec<&Measure<Q>> = measures.iter().filter(|m| m.is_defined()).collect();
        if defined.is_empty() {
            return None;
        }
        let n = defined.len() as f64;

        let val = defined.iter().filter_map(|m| m.val()).sum::<f64>() / n;
        let err_min = quadrature(defined.iter().map(|m| m.err_min()), n);
        let err_max = quadrature(defined.iter().map(|m| m.err_max()), n);

        let combined = Measure::new(Some(val), err_min, err_max);
        Some(self.rounder.round_measure(&combined))
    }
}

fn quadrature(errors: impl Iterator<Item = Option<f64>>, n: f64) -> Option<f64> {
    let mut sum_sq = 0.0;
    for err in errors {
        let err = err?;
        sum_sq += err * err;
    }
    Some(sqrt(sum_sq) / n)
}
