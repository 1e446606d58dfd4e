//! Calculator-driven transforms.

use super::inputs::{ColumnMap, FromCatalog};
use super::{FillStats, Transform};
use crate::catalog::Catalog;
use crate::error::Result;
use exocat_core::{Calculator, Measure, Quantity, Rounder, StarAggregator};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Fills a column row by row from a calculator.
///
/// A row keeps its value when the target is already defined. Otherwise the
/// calculator runs on that row's inputs and its rounded result is written,
/// or the row stays undefined when the inputs are insufficient.
#[derive(Debug, Clone)]
pub struct RowCalculation<C> {
    name: String,
    calculator: C,
    columns: ColumnMap,
    target: String,
    rounder: Rounder,
}

impl<C> RowCalculation<C>
where
    C: Calculator,
    C::Inputs: FromCatalog,
{
    /// Reads default columns and writes the output quantity's own column.
    pub fn new(name: impl Into<String>, calculator: C) -> Self {
        Self {
            name: name.into(),
            calculator,
            columns: ColumnMap::defaults(C::Inputs::ROLES),
            target: C::Output::NAME.to_string(),
            rounder: Rounder::new(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Rebinds input roles to other columns.
    pub fn with_columns(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        self.columns = ColumnMap::resolve(C::Inputs::ROLES, overrides)?;
        Ok(self)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Target measures after the pass, with outcome counts.
    pub fn compute(&self, catalog: &Catalog) -> Result<(Vec<Measure<C::Output>>, FillStats)> {
        C::Inputs::check_columns(catalog, &self.columns)?;
        let inputs = C::Inputs::from_catalog(catalog, &self.columns)?;
        let current = catalog.measures_or_undefined::<C::Output>(&self.target)?;
        let mut stats = FillStats::default();

        let out: Vec<Measure<C::Output>> = current
            .into_iter()
            .zip(&inputs)
            .map(|(existing, inputs)| {
                if existing.is_defined() {
                    stats.kept += 1;
                    return existing;
                }
                match self.calculator.calc(inputs) {
                    Some(m) => {
                        stats.filled += 1;
                        self.rounder.round_measure(&m)
                    }
                    None => {
                        stats.undefined += 1;
                        Measure::undefined()
                    }
                }
            })
            .collect();
        Ok((out, stats))
    }
}

impl<C> Transform for RowCalculation<C>
where
    C: Calculator,
    C::Inputs: FromCatalog,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        describe(&self.target, C::Output::UNIT, &self.columns)
    }

    fn apply(&self, catalog: &Catalog) -> Result<Catalog> {
        let (measures, stats) = self.compute(catalog)?;
        debug!(
            step = %self.name,
            target = %self.target,
            filled = stats.filled,
            kept = stats.kept,
            undefined = stats.undefined,
            "row calculation"
        );
        catalog.with_measures(&self.target, &measures)
    }
}

/// Recomputes a star property from each of its planets.
///
/// Rows are grouped by `star_name`. For every star with at least one row
/// where the target is undefined, the calculator runs on each planet row,
/// the per-planet results are combined by [`StarAggregator`], and the
/// aggregate is written to every row of that star, including rows that
/// already had a value. Stars whose rows are all defined are left alone, as
/// are rows without a star name.
#[derive(Debug, Clone)]
pub struct StarRecompute<C> {
    name: String,
    calculator: C,
    columns: ColumnMap,
    target: String,
    aggregator: StarAggregator,
}

impl<C> StarRecompute<C>
where
    C: Calculator,
    C::Inputs: FromCatalog,
{
    pub fn new(name: impl Into<String>, calculator: C) -> Self {
        Self {
            name: name.into(),
            calculator,
            columns: ColumnMap::defaults(C::Inputs::ROLES),
            target: C::Output::NAME.to_string(),
            aggregator: StarAggregator::default(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_columns(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        self.columns = ColumnMap::resolve(C::Inputs::ROLES, overrides)?;
        Ok(self)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn compute(&self, catalog: &Catalog) -> Result<(Vec<Measure<C::Output>>, FillStats)> {
        C::Inputs::check_columns(catalog, &self.columns)?;
        let inputs = C::Inputs::from_catalog(catalog, &self.columns)?;
        let mut current = catalog.measures_or_undefined::<C::Output>(&self.target)?;
        let groups = catalog.star_groups()?;
        let mut stats = FillStats::default();

        for (star, rows) in &groups {
            if rows.iter().all(|&row| current[row].is_defined()) {
                stats.kept += rows.len();
                continue;
            }
            let planets: Vec<Measure<C::Output>> = rows
                .iter()
                .filter_map(|&row| self.calculator.calc(&inputs[row]))
                .collect();

            match self.aggregator.aggregate(&planets) {
                Some(aggregate) => {
                    trace!(star = %star, planets = planets.len(), value = %aggregate, "star aggregate");
                    for &row in rows {
                        current[row] = aggregate;
                    }
                    stats.filled += rows.len();
                }
                None => {
                    let (defined, undefined): (Vec<usize>, Vec<usize>) =
                        rows.iter().partition(|&&row| current[row].is_defined());
                    stats.kept += defined.len();
                    stats.undefined += undefined.len();
                }
            }
        }
        Ok((current, stats))
    }
}

impl<C> Transform for StarRecompute<C>
where
    C: Calculator,
    C::Inputs: FromCatalog,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let base = describe(&self.target, C::Output::UNIT, &self.columns);
        format!("{}, aggregated per star", base)
    }

    fn apply(&self, catalog: &Catalog) -> Result<Catalog> {
        let (measures, stats) = self.compute(catalog)?;
        debug!(
            step = %self.name,
            target = %self.target,
            filled = stats.filled,
            kept = stats.kept,
            undefined = stats.undefined,
            "star recompute"
        );
        catalog.with_measures(&self.target, &measures)
    }
}

fn describe(target: &str, unit: &str, columns: &ColumnMap) -> String {
    let sources: Vec<&str> = columns.iter().map(|(_, column)| column).collect();
    if unit.is_empty() {
        format!("{} from {}", target, sources.join(", "))
    } else {
        format!("{} [{}] from {}", target, unit, sources.join(", "))
    }
}
