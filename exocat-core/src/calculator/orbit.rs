//! Kepler's third law, both directions.

use super::{absolute, CalcInputs, Calculator};
use crate::constants::{AU_M, FOUR_PI_SQUARED, G, G_RERR, SOL_MASS_KG};
use crate::math::cbrt;
use crate::measure::{Bound, Measure, OrbitalPeriod, SemiMajorAxis, StarMass};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SemiMajorAxisInputs {
    pub star_mass: Measure<StarMass>,
    pub orbital_period: Measure<OrbitalPeriod>,
}

impl CalcInputs for SemiMajorAxisInputs {
    fn is_complete(&self) -> bool {
        self.star_mass.is_defined() && self.orbital_period.is_defined()
    }
}

/// `a = (G·M·P² / 4π²)^(1/3)`, in AU.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiMajorAxisCalc;

impl SemiMajorAxisCalc {
    fn ferr(&self, val: f64, inputs: &SemiMajorAxisInputs, bound: Bound) -> Option<f64> {
        let mass_rerr = inputs.star_mass.rerr_bound(bound)?;
        let period_rerr = inputs.orbital_period.rerr_bound(bound)?;
        let rerr = (G_RERR + mass_rerr + 2.0 * period_rerr) / 3.0;
        Some(absolute(rerr, val))
    }
}

impl Calculator for SemiMajorAxisCalc {
    type Inputs = SemiMajorAxisInputs;
    type Output = SemiMajorAxis;

    fn fval(&self, inputs: &SemiMajorAxisInputs) -> Option<f64> {
        let mass = inputs.star_mass.val_si().filter(|m| *m > 0.0)?;
        let period = inputs.orbital_period.val_si().filter(|p| *p > 0.0)?;
        Some(cbrt(G * mass * period * period / FOUR_PI_SQUARED) / AU_M)
    }

    fn ferr_min(&self, val: f64, inputs: &SemiMajorAxisInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Min)
    }

    fn ferr_max(&self, val: f64, inputs: &SemiMajorAxisInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarMassInputs {
    pub semi_major_axis: Measure<SemiMajorAxis>,
    pub orbital_period: Measure<OrbitalPeriod>,
}

impl CalcInputs for StarMassInputs {
    fn is_complete(&self) -> bool {
        self.semi_major_axis.is_defined() && self.orbital_period.is_defined()
    }
}

/// `M = 4π²·a³ / (G·P²)`, in solar masses.
///
/// The planet mass is neglected against the star's.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarMassCalc;

impl StarMassCalc {
    fn ferr(&self, val: f64, inputs: &StarMassInputs, bound: Bound) -> Option<f64> {
        let axis_rerr = inputs.semi_major_axis.rerr_bound(bound)?;
        let period_rerr = inputs.orbital_period.rerr_bound(bound)?;
        let rerr = G_RERR + 3.0 * axis_rerr + 2.0 * period_rerr;
        Some(absolute(rerr, val))
    }
}

impl Calculator for StarMassCalc {
    type Inputs = StarMassInputs;
    type Output = StarMass;

    fn fval(&self, inputs: &StarMassInputs) -> Option<f64> {
        let axis = inputs.semi_major_axis.val_si().filter(|a| *a > 0.0)?;
        let period = inputs.orbital_period.val_si().filter(|p| *p > 0.0)?;
        Some(FOUR_PI_SQUARED * axis * axis * axis / (G * period * period) / SOL_MASS_KG)
    }

    fn ferr_min(&self, val: f64, inputs: &StarMassInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Min)
    }

    fn ferr_max(&self, val: f64, inputs: &StarMassInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Max)
    }
}
