//! Physical constants and catalog unit factors.
//!
//! Values follow the conventions of the exoplanet catalogs this crate is fed
//! with, not the latest IAU nominal values. Changing them changes every
//! derived column, so they are fixed literals.

/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.6743e-11;

/// Relative uncertainty of [`G`].
pub const G_RERR: f64 = 5e-5;

/// Solar mass in kilograms.
pub const SOL_MASS_KG: f64 = 1.989e30;

/// Solar radius in meters.
pub const SOL_RAD_M: f64 = 6.957e8;

/// Jupiter mass in kilograms.
pub const JUP_MASS_KG: f64 = 1.898e27;

/// Jupiter radius in meters.
pub const JUP_RAD_M: f64 = 6.9911e7;

/// Astronomical unit in meters, as used by the catalog.
pub const AU_M: f64 = 1.496e11;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// Stellar effective temperature error assumed when the catalog gives none, K.
pub const DEFAULT_STAR_TEFF_ERR: f64 = 100.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const FOUR_PI_SQUARED: f64 = 4.0 * PI * PI;
