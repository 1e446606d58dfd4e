//! Values with asymmetric error bounds.
//!
//! A [`Measure`] holds a nominal value plus independent lower and upper
//! absolute errors. Every field is optional: catalogs routinely record a
//! value without errors, or one bound without the other, and an undefined
//! value is not the same thing as zero.
//!
//! The type parameter is a [`Quantity`] marker naming the catalog column the
//! measure belongs to and the factor converting the catalog unit to SI.
//! Conversion is a plain multiplication applied to the value and both bounds.
//!
//! ```
//! use exocat_core::measure::{Measure, StarMass};
//!
//! let m = Measure::<StarMass>::exact(1.0, 0.1, 0.2);
//! assert_eq!(m.err(), Some(0.15000000000000002));
//! assert_eq!(m.val_si(), Some(1.989e30));
//! ```

use crate::constants::{AU_M, JUP_MASS_KG, JUP_RAD_M, SECONDS_PER_DAY_F64, SOL_MASS_KG, SOL_RAD_M};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A physical quantity stored in a catalog column.
pub trait Quantity:
    Copy + Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static
{
    /// Catalog column holding the value.
    const NAME: &'static str;
    /// Unit the catalog records the value in.
    const UNIT: &'static str;
    /// Multiplier from the catalog unit to the SI unit.
    const SI_FACTOR: f64;
}

macro_rules! quantity {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $unit:literal, $factor:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl Quantity for $ty {
            const NAME: &'static str = $name;
            const UNIT: &'static str = $unit;
            const SI_FACTOR: f64 = $factor;
        }
    };
}

quantity!(
    /// Host star mass, solar masses.
    StarMass, "star_mass", "M_sun", SOL_MASS_KG
);
quantity!(
    /// Host star radius, solar radii.
    StarRadius, "star_radius", "R_sun", SOL_RAD_M
);
quantity!(
    /// Orbit semi-major axis, AU.
    SemiMajorAxis, "semi_major_axis", "AU", AU_M
);
quantity!(Eccentricity, "eccentricity", "", 1.0);
quantity!(
    /// Planet mass, Jupiter masses.
    Mass, "mass", "M_jup", JUP_MASS_KG
);
quantity!(
    /// Planet radius, Jupiter radii.
    Radius, "radius", "R_jup", JUP_RAD_M
);
quantity!(
    /// Orbital period, days.
    OrbitalPeriod, "orbital_period", "d", SECONDS_PER_DAY_F64
);
quantity!(
    /// Planet equilibrium temperature, K.
    TempCalculated, "temp_calculated", "K", 1.0
);
quantity!(
    /// Distance to the host star, pc.
    StarDistance, "star_distance", "pc", 1.0
);
quantity!(StarMetallicity, "star_metallicity", "dex", 1.0);
quantity!(
    /// Host star effective temperature, K.
    StarTeff, "star_teff", "K", 1.0
);
quantity!(
    /// Planet Bond albedo.
    Albedo, "albedo", "", 1.0
);

/// Which side of a measure's error bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

/// Value with independent lower and upper absolute errors.
///
/// Errors are stored as magnitudes; a negative bound (as some archives record
/// the lower error) is folded to its absolute value on construction.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Measure<Q: Quantity> {
    val: Option<f64>,
    err_min: Option<f64>,
    err_max: Option<f64>,
    #[serde(skip)]
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> Measure<Q> {
    pub fn new(val: Option<f64>, err_min: Option<f64>, err_max: Option<f64>) -> Self {
        Self {
            val: val.filter(|v| !v.is_nan()),
            err_min: err_min.filter(|e| !e.is_nan()).map(f64::abs),
            err_max: err_max.filter(|e| !e.is_nan()).map(f64::abs),
            quantity: PhantomData,
        }
    }

    /// Measure with every field defined.
    pub fn exact(val: f64, err_min: f64, err_max: f64) -> Self {
        Self::new(Some(val), Some(err_min), Some(err_max))
    }

    /// Measure with the same error on both sides.
    pub fn symmetric(val: f64, err: f64) -> Self {
        Self::exact(val, err, err)
    }

    /// Value without recorded errors.
    pub fn bare(val: f64) -> Self {
        Self::new(Some(val), None, None)
    }

    pub fn undefined() -> Self {
        Self::new(None, None, None)
    }

    pub fn val(&self) -> Option<f64> {
        self.val
    }

    pub fn err_min(&self) -> Option<f64> {
        self.err_min
    }

    pub fn err_max(&self) -> Option<f64> {
        self.err_max
    }

    pub fn is_defined(&self) -> bool {
        self.val.is_some()
    }

    /// Mean of both bounds, undefined unless both are.
    pub fn err(&self) -> Option<f64> {
        Some((self.err_min? + self.err_max?) / 2.0)
    }

    pub fn rerr_min(&self) -> Option<f64> {
        relative(self.err_min?, self.val?)
    }

    pub fn rerr_max(&self) -> Option<f64> {
        relative(self.err_max?, self.val?)
    }

    pub fn rerr(&self) -> Option<f64> {
        relative(self.err()?, self.val?)
    }

    pub fn err_bound(&self, bound: Bound) -> Option<f64> {
        match bound {
            Bound::Min => self.err_min,
            Bound::Max => self.err_max,
        }
    }

    pub fn rerr_bound(&self, bound: Bound) -> Option<f64> {
        match bound {
            Bound::Min => self.rerr_min(),
            Bound::Max => self.rerr_max(),
        }
    }

    /// Same value with new error bounds.
    pub fn with_errors(&self, err_min: Option<f64>, err_max: Option<f64>) -> Self {
        Self::new(self.val, err_min, err_max)
    }

    pub fn val_si(&self) -> Option<f64> {
        self.val.map(to_si::<Q>)
    }

    pub fn err_min_si(&self) -> Option<f64> {
        self.err_min.map(to_si::<Q>)
    }

    pub fn err_max_si(&self) -> Option<f64> {
        self.err_max.map(to_si::<Q>)
    }

    pub fn err_si(&self) -> Option<f64> {
        self.err().map(to_si::<Q>)
    }

    /// Catalog column name of this quantity.
    pub fn name(&self) -> &'static str {
        Q::NAME
    }
}

impl<Q: Quantity> Default for Measure<Q> {
    fn default() -> Self {
        Self::undefined()
    }
}

impl<Q: Quantity> fmt::Debug for Measure<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("quantity", &Q::NAME)
            .field("val", &self.val)
            .field("err_min", &self.err_min)
            .field("err_max", &self.err_max)
            .finish()
    }
}

impl<Q: Quantity> fmt::Display for Measure<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.val, self.err()) {
            (Some(val), Some(err)) => write!(f, "{} +/- {}", val, err),
            (Some(val), None) => write!(f, "{}", val),
            (None, _) => write!(f, "undefined"),
        }
    }
}

#[inline]
fn to_si<Q: Quantity>(x: f64) -> f64 {
    x * Q::SI_FACTOR
}

#[inline]
fn relative(err: f64, val: f64) -> Option<f64> {
    if val == 0.0 {
        return None;
    }
    let rerr = err / val;
    rerr.is_finite().then_some(rerr)
}
