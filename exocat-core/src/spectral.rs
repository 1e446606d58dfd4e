//! Spectral class to effective temperature lookup.
//!
//! The table is expanded once from coarse per-letter temperature ranges. Each
//! letter yields a letter-only entry `"<L>-1"` covering the whole range, and
//! twenty entries `"<L>0.0"` through `"<L>9.5"` in half-subclass steps, each
//! a tenth of the range wide. Within a letter the temperature falls as the
//! subclass number rises: G0 is the hottest G star, G9.5 the coolest.
//!
//! ```
//! use exocat_core::spectral::SpClassTeffTable;
//!
//! let table = SpClassTeffTable::standard();
//! let sun = table.get_ms("G2V").unwrap();
//! assert_eq!(sun.val(), Some(5750.0));
//! assert_eq!(sun.err_min(), Some(50.0));
//! ```

use crate::errors::{ExoError, ExoResult};
use crate::measure::{Measure, StarTeff};
use crate::table::{StrTable, Table, TableValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Coarse temperature range per spectral letter, kelvin.
pub const STANDARD_RANGES: [(char, (f64, f64)); 6] = [
    ('B', (10000.0, 30000.0)),
    ('A', (7400.0, 10000.0)),
    ('F', (6000.0, 7400.0)),
    ('G', (5000.0, 6000.0)),
    ('K', (3800.0, 5000.0)),
    ('M', (2500.0, 3800.0)),
];

const SUBCLASS_STEPS: usize = 20;
const SUBCLASS_STEP: f64 = 0.5;
const LETTER_ONLY: &str = "-1";

static CLASS_WITH_SUBCLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[BAFGKM]\d(\.\d)?").expect("valid spectral class pattern"));
static CLASS_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[BAFGKM]").expect("valid spectral letter pattern"));

/// Spectral letter with an optional subclass number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralClass {
    pub letter: char,
    pub subclass: Option<f64>,
}

impl SpectralClass {
    /// Parses the leading class of a catalog spectral type such as `"K1.5 V"`.
    ///
    /// Only the prefix is read; luminosity class and peculiarity suffixes are
    /// ignored. Returns `None` when the string does not start with one of
    /// `B A F G K M`.
    pub fn parse(sp_type: &str) -> Option<Self> {
        let sp_type = sp_type.trim();
        if let Some(m) = CLASS_WITH_SUBCLASS.find(sp_type) {
            let text = m.as_str();
            let letter = text.chars().next()?;
            let subclass = text[1..].parse::<f64>().ok()?;
            return Some(Self {
                letter,
                subclass: Some(subclass),
            });
        }
        let m = CLASS_LETTER.find(sp_type)?;
        Some(Self {
            letter: m.as_str().chars().next()?,
            subclass: None,
        })
    }

    /// Table key, e.g. `"G2.0"` or `"K-1"` for a letter alone.
    pub fn key(&self) -> String {
        match self.subclass {
            Some(sub) => format!("{}{:.1}", self.letter, sub),
            None => format!("{}{}", self.letter, LETTER_ONLY),
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Spectral class → stellar effective temperature table.
#[derive(Debug, Clone)]
pub struct SpClassTeffTable {
    table: StrTable<StarTeff>,
}

impl SpClassTeffTable {
    /// Expands coarse `(letter, (low, high))` ranges into the fine table.
    pub fn new(ranges: &[(char, (f64, f64))]) -> ExoResult<Self> {
        for &(letter, (low, high)) in ranges {
            validate_range(letter, low, high)?;
        }
        Ok(Self::build(ranges))
    }

    /// Table for the B through M ranges in [`STANDARD_RANGES`].
    pub fn standard() -> Self {
        Self::build(&STANDARD_RANGES)
    }

    fn build(ranges: &[(char, (f64, f64))]) -> Self {
        let mut entries = Vec::with_capacity(ranges.len() * (SUBCLASS_STEPS + 1));
        for &(letter, (low, high)) in ranges {
            let span = high - low;
            let letter_only = SpectralClass {
                letter,
                subclass: None,
            };
            entries.push((letter_only.key(), TableValue::new(low + span / 2.0, span / 2.0)));

            let sub_span = span / 10.0;
            let err = sub_span / 2.0;
            for step in 0..SUBCLASS_STEPS {
                let sub = step as f64 * SUBCLASS_STEP;
                let class = SpectralClass {
                    letter,
                    subclass: Some(sub),
                };
                let val = low + (9.0 - sub) * sub_span + err;
                entries.push((class.key(), TableValue::new(val, err)));
            }
        }
        Self {
            table: Table::new(entries),
        }
    }

    pub fn table(&self) -> &StrTable<StarTeff> {
        &self.table
    }

    pub fn get(&self, class: &SpectralClass) -> Option<Measure<StarTeff>> {
        self.table.get_ms(&class.key())
    }

    /// Teff for a raw catalog spectral type, `None` when unparseable or unknown.
    pub fn get_ms(&self, sp_type: &str) -> Option<Measure<StarTeff>> {
        let class = SpectralClass::parse(sp_type)?;
        self.get(&class)
    }
}

impl Default for SpClassTeffTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_range(letter: char, low: f64, high: f64) -> ExoResult<()> {
    if !letter.is_ascii_uppercase() {
        return Err(ExoError::invalid_spectral_range(
            letter.to_string(),
            "class must be an uppercase letter",
        ));
    }
    if !low.is_finite() || !high.is_finite() {
        return Err(ExoError::invalid_spectral_range(
            letter.to_string(),
            "bounds must be finite",
        ));
    }
    if low >= high {
        return Err(ExoError::invalid_spectral_range(
            letter.to_string(),
            format!("low bound {} must be below high bound {}", low, high),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_letter_and_subclass() {
        assert_eq!(
            SpectralClass::parse("G2V"),
            Some(SpectralClass {
                letter: 'G',
                subclass: Some(2.0)
            })
        );
        assert_eq!(
            SpectralClass::parse("K1.5 IV"),
            Some(SpectralClass {
                letter: 'K',
                subclass: Some(1.5)
            })
        );
    }

    #[test]
    fn parse_letter_only() {
        assert_eq!(
            SpectralClass::parse("M"),
            Some(SpectralClass {
                letter: 'M',
                subclass: None
            })
        );
        assert_eq!(SpectralClass::parse("Fe").unwrap().subclass, None);
    }

    #[test]
    fn parse_rejects_unknown_prefix() {
        assert!(SpectralClass::parse("").is_none());
        assert!(SpectralClass::parse("O5").is_none());
        assert!(SpectralClass::parse("L3").is_none());
        assert!(SpectralClass::parse("g2").is_none());
        assert!(SpectralClass::parse("nan").is_none());
    }

    #[test]
    fn keys() {
        assert_eq!(SpectralClass::parse("G2").unwrap().key(), "G2.0");
        assert_eq!(SpectralClass::parse("A0.5").unwrap().key(), "A0.5");
        assert_eq!(SpectralClass::parse("B").unwrap().key(), "B-1");
    }

    #[test]
    fn table_size() {
        let table = SpClassTeffTable::standard();
        assert_eq!(table.table().len(), 6 * 21);
    }

    #[test]
    fn letter_only_covers_whole_range() {
        let table = SpClassTeffTable::standard();
        let g = table.get_ms("G").unwrap();
        assert_eq!(g.val(), Some(5500.0));
        assert_eq!(g.err_min(), Some(500.0));
        assert_eq!(g.err_max(), Some(500.0));
    }

    #[test]
    fn g2_between_bounds_and_cooler_than_g0() {
        let table = SpClassTeffTable::standard();
        let g0 = table.get_ms("G0").unwrap().val().unwrap();
        let g2 = table.get_ms("G2").unwrap().val().unwrap();
        assert!(g2 > 5000.0 && g2 < 6000.0);
        assert!(g2 < g0);
        assert_eq!(g0, 5950.0);
        assert_eq!(g2, 5750.0);
    }

    #[test]
    fn value_non_increasing_with_subclass() {
        let table = SpClassTeffTable::standard();
        for (letter, _) in STANDARD_RANGES {
            let mut previous = f64::INFINITY;
            for step in 0..SUBCLASS_STEPS {
                let class = SpectralClass {
                    letter,
                    subclass: Some(step as f64 * SUBCLASS_STEP),
                };
                let val = table.get(&class).unwrap().val().unwrap();
                assert!(val <= previous, "{} not monotonic", class);
                previous = val;
            }
        }
    }

    #[test]
    fn coolest_subclass_sits_on_lower_bound() {
        let table = SpClassTeffTable::standard();
        let m = table.get_ms("M9.5").unwrap();
        assert_eq!(m.val(), Some(2500.0));
        assert_eq!(m.err_min(), Some(65.0));
    }

    #[test]
    fn off_grid_subclass_is_undefined() {
        let table = SpClassTeffTable::standard();
        assert!(table.get_ms("G2.3").is_none());
        assert!(table.get_ms("X1").is_none());
    }

    #[test]
    fn custom_ranges_validated() {
        assert!(SpClassTeffTable::new(&[('G', (6000.0, 5000.0))]).is_err());
        assert!(SpClassTeffTable::new(&[('g', (5000.0, 6000.0))]).is_err());
        assert!(SpClassTeffTable::new(&[('G', (5000.0, f64::INFINITY))]).is_err());
        let table = SpClassTeffTable::new(&[('G', (5000.0, 6000.0))]).unwrap();
        assert_eq!(table.table().len(), 21);
        assert!(table.get_ms("K2").is_none());
    }
}
