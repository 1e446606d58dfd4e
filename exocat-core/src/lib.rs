//! Measures with asymmetric errors and the formulas that derive them.
//!
//! Exoplanet catalogs are full of holes: a planet with a period but no
//! semi-major axis, a star with a spectral type but no effective temperature.
//! This crate holds the numeric side of filling those holes. Values travel as
//! [`Measure`]s carrying separate lower and upper errors, calculators
//! propagate both bounds through their formulas, and every derived number is
//! rounded to the precision its error supports.
//!
//! Nothing here touches a catalog table; see `exocat-catalog` for that.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`measure`] | [`Measure`], the [`Quantity`] markers and their SI factors |
//! | [`rounding`] | [`Rounder`] significant-figure policy, [`ErrorSynthesizer`] |
//! | [`table`] | [`StrTable`], [`IntervalTable`], first-match lookup |
//! | [`spectral`] | [`SpClassTeffTable`], spectral class parsing |
//! | [`calculator`] | [`Calculator`] trait, semi-major axis, star mass, equilibrium temperature |
//! | [`aggregate`] | [`StarAggregator`] for per-star summaries |
//! | [`constants`] | Physical constants and unit factors |
//!
//! # Quick Start
//!
//! ```
//! use exocat_core::{Calculator, Measure, Rounder, SemiMajorAxisCalc, SemiMajorAxisInputs};
//!
//! let inputs = SemiMajorAxisInputs {
//!     star_mass: Measure::symmetric(1.0, 0.01),
//!     orbital_period: Measure::symmetric(365.25, 0.01),
//! };
//! let axis = SemiMajorAxisCalc.calc(&inputs).unwrap();
//! let axis = Rounder::new().round_measure(&axis);
//! assert_eq!(axis.err_min(), Some(0.003));
//! ```

pub mod aggregate;
pub mod calculator;
pub mod constants;
pub mod errors;
pub mod math;
pub mod measure;
pub mod rounding;
pub mod spectral;
pub mod table;

pub use aggregate::StarAggregator;
pub use calculator::{
    CalcInputs, Calculator, EquilibriumTempInputs, PlanetEquilibriumTempCalc, SemiMajorAxisCalc,
    SemiMajorAxisInputs, StarMassCalc, StarMassInputs, TempType,
};
pub use errors::{ExoError, ExoResult};
pub use measure::{Bound, Measure, Quantity};
pub use rounding::{ErrorSynthesizer, Rounder};
pub use spectral::{SpClassTeffTable, SpectralClass};
pub use table::{Interval, IntervalTable, StrTable, Table, TableValue};
