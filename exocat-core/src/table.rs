//! Ordered lookup tables producing measures.
//!
//! A [`Table`] is a list of `(key, TableValue)` entries kept in ascending
//! order of value. Lookup walks that order and returns the first entry whose
//! key matches, so for overlapping interval keys the entry with the lowest
//! value wins.
//!
//! | Alias | Key | Matches |
//! |-------|-----|---------|
//! | [`StrTable`] | `String` | exact string equality |
//! | [`IntervalTable`] | [`Interval`] | `min < x <= max` |

use crate::errors::{ExoError, ExoResult};
use crate::measure::{Measure, Quantity};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Value and symmetric error stored in a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TableValue {
    pub val: f64,
    pub err: f64,
}

impl TableValue {
    pub fn new(val: f64, err: f64) -> Self {
        Self { val, err }
    }
}

/// Half-open interval `(min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> ExoResult<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(ExoError::invalid_interval(min, max, "bounds must be numbers"));
        }
        if min >= max {
            return Err(ExoError::invalid_interval(
                min,
                max,
                "lower bound must be below upper bound",
            ));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min < x && x <= self.max
    }
}

/// Key type of a [`Table`].
pub trait TableKey {
    type Input: ?Sized;

    fn matches(&self, input: &Self::Input) -> bool;
}

impl TableKey for String {
    type Input = str;

    fn matches(&self, input: &str) -> bool {
        self == input
    }
}

impl TableKey for Interval {
    type Input = f64;

    fn matches(&self, input: &f64) -> bool {
        self.contains(*input)
    }
}

/// Lookup table whose hits become measures of quantity `Q`.
#[derive(Debug, Clone)]
pub struct Table<K, Q> {
    entries: Vec<(K, TableValue)>,
    quantity: PhantomData<Q>,
}

pub type StrTable<Q> = Table<String, Q>;
pub type IntervalTable<Q> = Table<Interval, Q>;

impl<K: TableKey, Q: Quantity> Table<K, Q> {
    /// Builds the table, sorting entries by value. Ties keep input order.
    pub fn new(entries: impl IntoIterator<Item = (K, TableValue)>) -> Self {
        let mut entries: Vec<(K, TableValue)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.1.val.total_cmp(&b.1.val));
        Self {
            entries,
            quantity: PhantomData,
        }
    }

    pub fn entries(&self) -> &[(K, TableValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in ascending value order, whose key matches `input`.
    pub fn get(&self, input: &K::Input) -> Option<&TableValue> {
        self.entries
            .iter()
            .find(|(key, _)| key.matches(input))
            .map(|(_, value)| value)
    }

    /// Measure built from the matching entry, error used for both bounds.
    pub fn get_ms(&self, input: &K::Input) -> Option<Measure<Q>> {
        self.get(input)
            .map(|value| Measure::symmetric(value.val, value.err))
    }

    /// Error of the entry just below `val`.
    ///
    /// Finds the first entry whose value exceeds `val` and returns the error of
    /// the entry before it. `None` when `val` is below the first entry or not
    /// below any entry.
    pub fn get_err_by_val(&self, val: f64) -> Option<f64> {
        let above = self.entries.iter().position(|(_, v)| v.val > val)?;
        if above == 0 {
            return None;
        }
        Some(self.entries[above - 1].1.err)
    }
}
