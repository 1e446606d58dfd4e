//! Planet equilibrium temperature.

use super::{absolute, CalcInputs, Calculator};
use crate::errors::{ExoError, ExoResult};
use crate::math::{pow, sqrt};
use crate::measure::{
    Albedo, Bound, Eccentricity, Measure, SemiMajorAxis, StarRadius, StarTeff, TempCalculated,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orbital distance the temperature is evaluated at.
///
/// The selector names the distance, not the temperature: `Min` is the
/// periastron `a·(1−e)` and yields the hottest temperature of the orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempType {
    #[default]
    Mean,
    Min,
    Max,
}

impl TempType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Distance for semi-major axis `a` and eccentricity `e`.
    fn distance(&self, a: f64, e: f64) -> f64 {
        match self {
            Self::Mean => a,
            Self::Min => a * (1.0 - e),
            Self::Max => a * (1.0 + e),
        }
    }

    /// Relative error of [`distance`](Self::distance).
    fn distance_rerr(&self, a_rerr: f64, e: f64, e_err: f64) -> Option<f64> {
        let term = match self {
            Self::Mean => return Some(a_rerr),
            Self::Min => e_err / (1.0 - e),
            Self::Max => e_err / (1.0 + e),
        };
        term.is_finite().then_some(a_rerr + term)
    }
}

impl FromStr for TempType {
    type Err = ExoError;

    fn from_str(s: &str) -> ExoResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(ExoError::unknown_temp_type(s)),
        }
    }
}

impl fmt::Display for TempType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Albedo and eccentricity are optional and count as zero with zero error
/// when absent or undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EquilibriumTempInputs {
    pub star_teff: Measure<StarTeff>,
    pub star_radius: Measure<StarRadius>,
    pub semi_major_axis: Measure<SemiMajorAxis>,
    pub albedo: Option<Measure<Albedo>>,
    pub eccentricity: Option<Measure<Eccentricity>>,
}

impl EquilibriumTempInputs {
    fn albedo(&self) -> Option<&Measure<Albedo>> {
        self.albedo.as_ref().filter(|m| m.is_defined())
    }

    fn eccentricity(&self) -> Option<&Measure<Eccentricity>> {
        self.eccentricity.as_ref().filter(|m| m.is_defined())
    }
}

impl CalcInputs for EquilibriumTempInputs {
    fn is_complete(&self) -> bool {
        self.star_teff.is_defined()
            && self.star_radius.is_defined()
            && self.semi_major_axis.is_defined()
    }
}

/// `T = T★ · sqrt(R★ / 2d) · (1 − A)^¼`, in kelvin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetEquilibriumTempCalc {
    pub ttype: TempType,
}

impl PlanetEquilibriumTempCalc {
    pub fn new(ttype: TempType) -> Self {
        Self { ttype }
    }

    /// Calculator for a selector given by name, e.g. from configuration.
    pub fn from_name(ttype: &str) -> ExoResult<Self> {
        Ok(Self::new(ttype.parse()?))
    }

    fn ferr(&self, val: f64, inputs: &EquilibriumTempInputs, bound: Bound) -> Option<f64> {
        let teff_rerr = inputs.star_teff.rerr_bound(bound)?;
        let radius_rerr = inputs.star_radius.rerr_bound(bound)?;
        let axis_rerr = inputs.semi_major_axis.rerr_bound(bound)?;

        let albedo_rerr = match inputs.albedo() {
            Some(albedo) if albedo.val() != Some(0.0) => albedo.rerr_bound(bound)?,
            _ => 0.0,
        };
        let (e, e_err) = match inputs.eccentricity() {
            Some(ecc) => (ecc.val()?, ecc.err_bound(bound).unwrap_or(0.0)),
            None => (0.0, 0.0),
        };
        let dist_rerr = self.ttype.distance_rerr(axis_rerr, e, e_err)?;

        let rerr = teff_rerr + (radius_rerr + dist_rerr) / 2.0 + albedo_rerr / 4.0;
        Some(absolute(rerr, val))
    }
}

impl Calculator for PlanetEquilibriumTempCalc {
    type Inputs = EquilibriumTempInputs;
    type Output = TempCalculated;

    fn fval(&self, inputs: &EquilibriumTempInputs) -> Option<f64> {
        let teff = inputs.star_teff.val()?;
        let radius = inputs.star_radius.val_si()?;
        let axis = inputs.semi_major_axis.val_si()?;
        let albedo = inputs.albedo().and_then(|m| m.val()).unwrap_or(0.0);
        let e = inputs.eccentricity().and_then(|m| m.val()).unwrap_or(0.0);

        let distance = self.ttype.distance(axis, e);
        if distance <= 0.0 {
            return None;
        }
        Some(teff * sqrt(radius / (2.0 * distance)) * pow(1.0 - albedo, 0.25))
    }

    fn ferr_min(&self, val: f64, inputs: &EquilibriumTempInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Min)
    }

    fn ferr_max(&self, val: f64, inputs: &EquilibriumTempInputs) -> Option<f64> {
        self.ferr(val, inputs, Bound::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sun_earth() -> EquilibriumTempInputs {
        EquilibriumTempInputs {
            star_teff: Measure::symmetric(5778.0, 100.0),
            star_radius: Measure::symmetric(1.0, 0.01),
            semi_major_axis: Measure::symmetric(1.0, 0.001),
            albedo: None,
            eccentricity: None,
        }
    }

    #[test]
    fn temp_type_parse() {
        assert_eq!("mean".parse::<TempType>().unwrap(), TempType::Mean);
        assert_eq!("MIN".parse::<TempType>().unwrap(), TempType::Min);
        assert_eq!(" max ".parse::<TempType>().unwrap(), TempType::Max);
        assert_eq!(
            "avg".parse::<TempType>().unwrap_err(),
            ExoError::unknown_temp_type("avg")
        );
        assert!(PlanetEquilibriumTempCalc::from_name("periastron").is_err());
    }

    #[test]
    fn temp_type_display_round_trips() {
        for ttype in [TempType::Mean, TempType::Min, TempType::Max] {
            assert_eq!(ttype.to_string().parse::<TempType>().unwrap(), ttype);
        }
    }

    #[test]
    fn earth_without_albedo() {
        let t = PlanetEquilibriumTempCalc::default().calc(&sun_earth()).unwrap();
        assert_relative_eq!(t.val().unwrap(), 278.617, epsilon = 1e-2);
    }

    #[test]
    fn albedo_cools_planet() {
        let inputs = EquilibriumTempInputs {
            albedo: Some(Measure::symmetric(0.3, 0.0)),
            ..sun_earth()
        };
        let t = PlanetEquilibriumTempCalc::default().calc(&inputs).unwrap();
        assert_relative_eq!(t.val().unwrap(), 254.849, epsilon = 1e-2);
    }

    #[test]
    fn mean_error_propagation() {
        let t = PlanetEquilibriumTempCalc::default().calc(&sun_earth()).unwrap();
        let rerr = 100.0 / 5778.0 + (0.01 + 0.001) / 2.0;
        assert_relative_eq!(t.rerr_min().unwrap(), rerr, max_relative = 1e-12);
        assert_relative_eq!(t.rerr_max().unwrap(), rerr, max_relative = 1e-12);
    }

    #[test]
    fn eccentric_orbit_distances() {
        let inputs = EquilibriumTempInputs {
            eccentricity: Some(Measure::symmetric(0.1, 0.05)),
            ..sun_earth()
        };
        let val = |ttype| {
            PlanetEquilibriumTempCalc::new(ttype)
                .calc(&inputs)
                .unwrap()
                .val()
                .unwrap()
        };
        assert_relative_eq!(val(TempType::Min), 293.688, epsilon = 1e-2);
        assert_relative_eq!(val(TempType::Mean), 278.617, epsilon = 1e-2);
        assert_relative_eq!(val(TempType::Max), 265.651, epsilon = 1e-2);
    }

    #[test]
    fn eccentricity_error_inflates_distance_error() {
        let inputs = EquilibriumTempInputs {
            eccentricity: Some(Measure::exact(0.1, 0.02, 0.05)),
            ..sun_earth()
        };
        let base = 100.0 / 5778.0 + 0.01 / 2.0;

        let min = PlanetEquilibriumTempCalc::new(TempType::Min).calc(&inputs).unwrap();
        assert_relative_eq!(
            min.rerr_min().unwrap(),
            base + (0.001 + 0.02 / 0.9) / 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            min.rerr_max().unwrap(),
            base + (0.001 + 0.05 / 0.9) / 2.0,
            max_relative = 1e-12
        );

        let max = PlanetEquilibriumTempCalc::new(TempType::Max).calc(&inputs).unwrap();
        assert_relative_eq!(
            max.rerr_max().unwrap(),
            base + (0.001 + 0.05 / 1.1) / 2.0,
            max_relative = 1e-12
        );
        assert!(min.rerr_max().unwrap() > max.rerr_max().unwrap());
    }

    #[test]
    fn undefined_optional_inputs_count_as_zero() {
        let inputs = EquilibriumTempInputs {
            albedo: Some(Measure::undefined()),
            eccentricity: Some(Measure::undefined()),
            ..sun_earth()
        };
        let with_undefined = PlanetEquilibriumTempCalc::default().calc(&inputs);
        let without = PlanetEquilibriumTempCalc::default().calc(&sun_earth());
        assert_eq!(with_undefined, without);
    }

    #[test]
    fn albedo_without_error_leaves_bounds_undefined() {
        let inputs = EquilibriumTempInputs {
            albedo: Some(Measure::bare(0.3)),
            ..sun_earth()
        };
        let t = PlanetEquilibriumTempCalc::default().calc(&inputs).unwrap();
        assert!(t.val().is_some());
        assert!(t.err_min().is_none());
        assert!(t.err_max().is_none());
    }

    #[test]
    fn missing_required_input() {
        let inputs = EquilibriumTempInputs {
            star_radius: Measure::undefined(),
            ..sun_earth()
        };
        assert!(PlanetEquilibriumTempCalc::default().calc(&inputs).is_none());
    }

    #[test]
    fn degenerate_periastron() {
        let inputs = EquilibriumTempInputs {
            eccentricity: Some(Measure::symmetric(1.0, 0.0)),
            ..sun_earth()
        };
        assert!(PlanetEquilibriumTempCalc::new(TempType::Min).calc(&inputs).is_none());
        assert!(PlanetEquilibriumTempCalc::new(TempType::Max).calc(&inputs).is_some());
    }
}
