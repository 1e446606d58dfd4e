//! Formula calculators with asymmetric error propagation.
//!
//! A [`Calculator`] supplies three pieces: the nominal value ([`fval`]) and
//! the lower and upper error bounds ([`ferr_min`], [`ferr_max`]). The two
//! bounds are computed by mirrored formulas, each fed the matching side's
//! relative errors, so they differ whenever the inputs are asymmetric.
//! [`calc`] strings them together and packages the result.
//!
//! Inputs are a typed struct per calculator. A calculator never sees a
//! catalog; the catalog crate maps columns onto these structs.
//!
//! | Calculator | Inputs | Output |
//! |------------|--------|--------|
//! | [`SemiMajorAxisCalc`] | star mass, orbital period | semi-major axis, AU |
//! | [`StarMassCalc`] | semi-major axis, orbital period | star mass, M☉ |
//! | [`PlanetEquilibriumTempCalc`] | star Teff, star radius, semi-major axis, albedo?, eccentricity? | temperature, K |
//!
//! [`fval`]: Calculator::fval
//! [`ferr_min`]: Calculator::ferr_min
//! [`ferr_max`]: Calculator::ferr_max
//! [`calc`]: Calculator::calc

pub mod orbit;
pub mod temperature;

pub use orbit::{SemiMajorAxisCalc, SemiMajorAxisInputs, StarMassCalc, StarMassInputs};
pub use temperature::{EquilibriumTempInputs, PlanetEquilibriumTempCalc, TempType};

use crate::measure::{Measure, Quantity};

/// Input bundle of a calculator.
pub trait CalcInputs {
    /// `true` when every required input has a defined value.
    fn is_complete(&self) -> bool;
}

pub trait Calculator {
    type Inputs: CalcInputs;
    type Output: Quantity;

    /// Nominal derived value, in the output quantity's catalog unit.
    fn fval(&self, inputs: &Self::Inputs) -> Option<f64>;

    /// Absolute lower error of `val`.
    fn ferr_min(&self, val: f64, inputs: &Self::Inputs) -> Option<f64>;

    /// Absolute upper error of `val`.
    fn ferr_max(&self, val: f64, inputs: &Self::Inputs) -> Option<f64>;

    /// Value, then lower bound, then upper bound, as one measure.
    ///
    /// `None` when an input is missing or the value is not a finite number.
    /// Error bounds that cannot be propagated (an input with no error, or a
    /// relative error over a zero value) are left undefined.
    fn calc(&self, inputs: &Self::Inputs) -> Option<Measure<Self::Output>> {
        if !inputs.is_complete() {
            return None;
        }
        let val = self.fval(inputs).filter(|v| v.is_finite())?;
        let err_min = self.ferr_min(val, inputs).filter(|e| e.is_finite());
        let err_max = self.ferr_max(val, inputs).filter(|e| e.is_finite());
        Some(Measure::new(Some(val), err_min, err_max))
    }
}

/// `rerr × val`, the absolute error for a relative one.
#[inline]
pub(crate) fn absolute(rerr: f64, val: f64) -> f64 {
    (rerr * val).abs()
}
