use approx::assert_relative_eq;
use exocat_core::measure::{OrbitalPeriod, StarMass, StarRadius};
use exocat_core::{
    Calculator, EquilibriumTempInputs, ErrorSynthesizer, Measure, PlanetEquilibriumTempCalc,
    Rounder, SemiMajorAxisCalc, SemiMajorAxisInputs, SpClassTeffTable, StarAggregator,
    StarMassCalc, StarMassInputs, TempType,
};

/// Period with an error synthesized from its written precision.
fn period(days: f64) -> Measure<OrbitalPeriod> {
    let err = ErrorSynthesizer::Precision.gen(days);
    Measure::new(Some(days), err, err)
}

// --- Bare catalog values to a rounded temperature ---

#[test]
fn spectral_type_to_equilibrium_temperature() {
    let teff = SpClassTeffTable::standard().get_ms("G2V").unwrap();
    let star_mass = Measure::<StarMass>::symmetric(1.0, 0.05);
    let axis = SemiMajorAxisCalc
        .calc(&SemiMajorAxisInputs {
            star_mass,
            orbital_period: period(365.25),
        })
        .unwrap();

    let inputs = EquilibriumTempInputs {
        star_teff: teff,
        star_radius: Measure::<StarRadius>::symmetric(1.0, 0.02),
        semi_major_axis: axis,
        albedo: None,
        eccentricity: None,
    };
    let temp = PlanetEquilibriumTempCalc::new(TempType::Mean).calc(&inputs).unwrap();
    let temp = Rounder::new().round_measure(&temp);

    // 5750 K star at 1 AU
    assert_relative_eq!(temp.val().unwrap(), 277.0, epsilon = 1.0);
    let err = temp.err_min().unwrap();
    assert!(err > 5.0 && err < 10.0, "unexpected error {}", err);
    assert_eq!(temp.err_min(), temp.err_max());
}

#[test]
fn rounded_value_matches_error_precision() {
    let temp = Measure::<exocat_core::measure::TempCalculated>::exact(1234.5678, 12.34, 12.34);
    let rounded = Rounder::new().round_measure(&temp);
    assert_eq!(rounded.err_min(), Some(12.0));
    assert_eq!(rounded.val(), Some(1235.0));
}

// --- Per-star recompute by hand ---

#[test]
fn star_mass_from_two_planets() {
    let planets = [(0.0465, 4.2308), (0.0997, 13.2425)];
    let synth = ErrorSynthesizer::Precision;
    let masses: Vec<Measure<StarMass>> = planets
        .iter()
        .filter_map(|&(a, p)| {
            let a_err = synth.gen(a);
            StarMassCalc.calc(&StarMassInputs {
                semi_major_axis: Measure::new(Some(a), a_err, a_err),
                orbital_period: period(p),
            })
        })
        .collect();
    assert_eq!(masses.len(), 2);

    let star = StarAggregator::default().aggregate(&masses).unwrap();
    let mean = (masses[0].val().unwrap() + masses[1].val().unwrap()) / 2.0;
    assert_relative_eq!(star.val().unwrap(), mean, max_relative = 0.01);
    assert!(star.err_min().unwrap() < masses[0].err_min().unwrap());
}

#[test]
fn kepler_round_trip_through_rounding() {
    let inputs = SemiMajorAxisInputs {
        star_mass: Measure::symmetric(0.8, 0.04),
        orbital_period: Measure::symmetric(50.0, 0.1),
    };
    let axis = Rounder::new().round_measure(&SemiMajorAxisCalc.calc(&inputs).unwrap());
    let mass = StarMassCalc
        .calc(&StarMassInputs {
            semi_major_axis: axis,
            orbital_period: inputs.orbital_period,
        })
        .unwrap();
    assert_relative_eq!(mass.val().unwrap(), 0.8, max_relative = 0.05);
    // the axis error enters three times over
    assert!(mass.rerr().unwrap() > inputs.star_mass.rerr().unwrap());
}
