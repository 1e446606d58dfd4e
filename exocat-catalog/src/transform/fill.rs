//! Table lookups and error synthesis.

use super::{FillStats, Transform};
use crate::catalog::{Catalog, STAR_SP_TYPE};
use crate::error::Result;
use exocat_core::measure::StarTeff;
use exocat_core::{ErrorSynthesizer, Measure, Quantity, Rounder, SpClassTeffTable};
use tracing::debug;

/// Fills `star_teff` from the spectral type where it is undefined.
///
/// Unparseable or unknown spectral types leave the row undefined.
#[derive(Debug, Clone)]
pub struct SpectralTeffFill {
    source: String,
    target: String,
    table: SpClassTeffTable,
    rounder: Rounder,
}

impl SpectralTeffFill {
    pub fn new(table: SpClassTeffTable) -> Self {
        Self {
            source: STAR_SP_TYPE.to_string(),
            target: StarTeff::NAME.to_string(),
            table,
            rounder: Rounder::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn compute(&self, catalog: &Catalog) -> Result<(Vec<Measure<StarTeff>>, FillStats)> {
        let sp_types = catalog.text(&self.source)?;
        let current = catalog.measures_or_undefined::<StarTeff>(&self.target)?;
        let mut stats = FillStats::default();

        let out: Vec<Measure<StarTeff>> = current
            .into_iter()
            .zip(sp_types)
            .map(|(existing, sp_type)| {
                if existing.is_defined() {
                    stats.kept += 1;
                    return existing;
                }
                match sp_type.as_deref().and_then(|s| self.table.get_ms(s)) {
                    Some(teff) => {
                        stats.filled += 1;
                        self.rounder.round_measure(&teff)
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

impl Default for SpectralTeffFill {
    fn default() -> Self {
        Self::new(SpClassTeffTable::standard())
    }
}

impl Transform for SpectralTeffFill {
    fn name(&self) -> &str {
        "spectral_teff"
    }

    fn description(&self) -> String {
        format!("{} from spectral type in {}", self.target, self.source)
    }

    fn apply(&self, catalog: &Catalog) -> Result<Catalog> {
        let (measures, stats) = self.compute(catalog)?;
        debug!(
            source = %self.source,
            target = %self.target,
            filled = stats.filled,
            kept = stats.kept,
            undefined = stats.undefined,
            "spectral teff fill"
        );
        catalog.with_measures(&self.target, &measures)
    }
}

/// Any numeric column, read without unit knowledge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Untyped;

impl Quantity for Untyped {
    const NAME: &'static str = "";
    const UNIT: &'static str = "";
    const SI_FACTOR: f64 = 1.0;
}

/// Completes the error bounds of a value column.
///
/// Per row with a defined value: both bounds missing are replaced by one
/// synthesized error; one bound missing is mirrored from the other. Rows
/// without a value are left as they are. A catalog without the column is
/// returned unchanged.
#[derive(Debug, Clone)]
pub struct ErrorFill {
    column: String,
    synthesizer: ErrorSynthesizer,
}

impl ErrorFill {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            synthesizer: ErrorSynthesizer::Precision,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: ErrorSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    fn fill(&self, m: &Measure<Untyped>) -> Option<Measure<Untyped>> {
        let val = m.val()?;
        let (err_min, err_max) = match (m.err_min(), m.err_max()) {
            (Some(_), Some(_)) => return None,
            (Some(err), None) | (None, Some(err)) => (err, err),
            (None, None) => {
                let err = self.synthesizer.gen(val)?;
                (err, err)
            }
        };
        Some(Measure::exact(val, err_min, err_max))
    }
}

impl Transform for ErrorFill {
    fn name(&self) -> &str {
        "error_fill"
    }

    fn description(&self) -> String {
        match self.synthesizer {
            ErrorSynthesizer::Precision => format!("{} errors from value precision", self.column),
            ErrorSynthesizer::Constant(err) => format!("{} errors, constant +/- {}", self.column, err),
        }
    }

    fn apply(&self, catalog: &Catalog) -> Result<Catalog> {
        if !catalog.has_column(&self.column) {
            debug!(column = %self.column, "error fill skipped, no such column");
            return Ok(catalog.clone());
        }
        let mut stats = FillStats::default();
        let measures: Vec<Measure<Untyped>> = catalog
            .measures::<Untyped>(&self.column)?
            .into_iter()
            .map(|m| {
                if !m.is_defined() {
                    stats.undefined += 1;
                    return m;
                }
                match self.fill(&m) {
                    Some(filled) => {
                        stats.filled += 1;
                        filled
                    }
                    None => {
                        stats.kept += 1;
                        m
                    }
                }
            })
            .collect();
        debug!(
            column = %self.column,
            filled = stats.filled,
            kept = stats.kept,
            undefined = stats.undefined,
            "error fill"
        );
        catalog.with_measures(&self.column, &measures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Column;
    use approx::assert_relative_eq;
    use exocat_core::measure::Mass;

    fn spectral_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .set_column(
                STAR_SP_TYPE,
                Column::Text(vec![
                    Some("G2V".into()),
                    Some("K".into()),
                    Some("WD".into()),
                    None,
                    Some("M9.5".into()),
                ]),
            )
            .unwrap();
        catalog
            .set_column(
                "star_teff",
                Column::Numeric(vec![None, Some(4800.0), None, None, None]),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn spectral_fill_rules() {
        let (teff, stats) = SpectralTeffFill::default()
            .compute(&spectral_catalog())
            .unwrap();
        assert_eq!(teff[0], Measure::symmetric(5750.0, 50.0));
        assert_eq!(teff[1], Measure::bare(4800.0));
        assert!(!teff[2].is_defined());
        assert!(!teff[3].is_defined());
        assert_eq!(
            stats,
            FillStats {
                filled: 2,
                kept: 1,
                undefined: 2
            }
        );
    }

    #[test]
    fn spectral_fill_rounds_table_error() {
        let (teff, _) = SpectralTeffFill::default()
            .compute(&spectral_catalog())
            .unwrap();
        // 65 K has one significant figure kept
        assert_eq!(teff[4], Measure::symmetric(2500.0, 70.0));
    }

    #[test]
    fn spectral_fill_requires_text_source() {
        let fill = SpectralTeffFill::default().with_source("star_teff");
        assert!(fill.apply(&spectral_catalog()).is_err());
        let fill = SpectralTeffFill::default().with_source("sp_type");
        assert!(fill.apply(&spectral_catalog()).is_err());
    }

    fn mass_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .set_column(
                "mass",
                Column::Numeric(vec![Some(1.25), Some(2.0), Some(3.0), None, Some(0.0)]),
            )
            .unwrap();
        catalog
            .set_column(
                "mass_error_min",
                Column::Numeric(vec![None, Some(0.1), Some(0.2), None, None]),
            )
            .unwrap();
        catalog
            .set_column(
                "mass_error_max",
                Column::Numeric(vec![None, None, Some(0.3), Some(0.5), None]),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn error_fill_rules() {
        let out = ErrorFill::new("mass").apply(&mass_catalog()).unwrap();
        let mass = out.measures::<Mass>("mass").unwrap();

        assert_relative_eq!(mass[0].err_min().unwrap(), 0.05);
        assert_relative_eq!(mass[0].err_max().unwrap(), 0.05);
        assert_eq!(mass[1], Measure::symmetric(2.0, 0.1));
        assert_eq!(mass[2], Measure::exact(3.0, 0.2, 0.3));
        assert_eq!(mass[3], Measure::new(None, None, Some(0.5)));
        // zero is a value, not a gap
        assert_eq!(mass[4], Measure::symmetric(0.0, 0.5));
    }

    #[test]
    fn constant_error_fill() {
        let mut catalog = Catalog::new();
        catalog
            .set_column("star_teff", Column::Numeric(vec![Some(5778.0), Some(3042.5)]))
            .unwrap();
        let fill = ErrorFill::new("star_teff").with_synthesizer(ErrorSynthesizer::constant(100.0));
        let out = fill.apply(&catalog).unwrap();
        let teff = out.measures::<StarTeff>("star_teff").unwrap();
        assert_eq!(teff[0], Measure::symmetric(5778.0, 100.0));
        assert_eq!(teff[1], Measure::symmetric(3042.5, 100.0));
    }

    #[test]
    fn error_fill_without_column_is_noop() {
        let catalog = mass_catalog();
        let out = ErrorFill::new("radius").apply(&catalog).unwrap();
        assert_eq!(out, catalog);
    }
}
