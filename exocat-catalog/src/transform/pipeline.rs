use super::calculation::{RowCalculation, StarRecompute};
use super::fill::{ErrorFill, SpectralTeffFill};
use super::Transform;
use crate::catalog::Catalog;
use crate::config::{PipelineConfig, StepConfig};
use crate::error::Result;
use exocat_core::{
    ErrorSynthesizer, PlanetEquilibriumTempCalc, SemiMajorAxisCalc, SpClassTeffTable,
    StarMassCalc,
};
use tracing::info;

/// Ordered transforms, each fed the previous one's output.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every step of `config`, failing on the first invalid one.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let mut pipeline = Self::new();
        let table = SpClassTeffTable::standard();

        for step in &config.steps {
            match step {
                StepConfig::ErrorFill { columns, constant } => {
                    let synthesizer = match constant {
                        Some(err) => ErrorSynthesizer::constant(*err),
                        None => ErrorSynthesizer::Precision,
                    };
                    for column in columns {
                        pipeline.push(ErrorFill::new(column.as_str()).with_synthesizer(synthesizer));
                    }
                }
                StepConfig::SpectralTeff { source, target } => {
                    pipeline.push(
                        SpectralTeffFill::new(table.clone())
                            .with_source(source.as_str())
                            .with_target(target.as_str()),
                    );
                }
                StepConfig::SemiMajorAxis { target, columns } => {
                    let mut calc = RowCalculation::new("semi_major_axis", SemiMajorAxisCalc)
                        .with_columns(columns)?;
                    if let Some(target) = target {
                        calc = calc.with_target(target.as_str());
                    }
                    pipeline.push(calc);
                }
                StepConfig::EquilibriumTemp {
                    ttype,
                    target,
                    columns,
                } => {
                    let calculator = PlanetEquilibriumTempCalc::from_name(ttype)?;
                    let mut calc = RowCalculation::new("equilibrium_temp", calculator)
                        .with_columns(columns)?;
                    if let Some(target) = target {
                        calc = calc.with_target(target.as_str());
                    }
                    pipeline.push(calc);
                }
                StepConfig::StarMass { target, columns } => {
                    let mut recompute =
                        StarRecompute::new("star_mass", StarMassCalc).with_columns(columns)?;
                    if let Some(target) = target {
                        recompute = recompute.with_target(target.as_str());
                    }
                    pipeline.push(recompute);
                }
            }
        }
        Ok(pipeline)
    }

    /// Pipeline for [`PipelineConfig::standard`].
    pub fn standard() -> Result<Self> {
        Self::from_config(&PipelineConfig::standard())
    }

    pub fn push(&mut self, step: impl Transform + 'static) {
        self.steps.push(Box::new(step));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `(name, description)` of every step, in run order.
    pub fn describe(&self) -> Vec<(String, String)> {
        self.steps
            .iter()
            .map(|s| (s.name().to_string(), s.description()))
            .collect()
    }

    pub fn run(&self, catalog: &Catalog) -> Result<Catalog> {
        let mut current = catalog.clone();
        for (i, step) in self.steps.iter().enumerate() {
            info!(step = i + 1, name = step.name(), "{}", step.description());
            current = step.apply(&current)?;
        }
        info!(
            rows = current.len(),
            columns = current.column_names().len(),
            "pipeline finished"
        );
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Column, STAR_NAME};
    use crate::error::CatalogError;
    use std::collections::BTreeMap;

    #[test]
    fn standard_pipeline_expands_error_columns() {
        let pipeline = Pipeline::standard().unwrap();
        // seven precision fills, spectral, teff error, axis, star mass, temperature
        assert_eq!(pipeline.len(), 12);
        let names: Vec<String> = pipeline.describe().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names[0], "error_fill");
        assert_eq!(names[7], "spectral_teff");
        assert_eq!(names[11], "equilibrium_temp");
    }

    #[test]
    fn unknown_ttype_fails_at_build() {
        let config = PipelineConfig {
            steps: vec![StepConfig::EquilibriumTemp {
                ttype: "average".into(),
                target: None,
                columns: BTreeMap::new(),
            }],
        };
        let err = Pipeline::from_config(&config).err().unwrap();
        assert!(matches!(err, CatalogError::Core(_)));
    }

    #[test]
    fn unknown_role_fails_at_build() {
        let config = PipelineConfig {
            steps: vec![StepConfig::StarMass {
                target: None,
                columns: BTreeMap::from([("period".to_string(), "pl_orbper".to_string())]),
            }],
        };
        assert!(Pipeline::from_config(&config).is_err());
    }

    #[test]
    fn steps_run_in_order() {
        let mut catalog = Catalog::new();
        catalog
            .set_column(STAR_NAME, Column::Text(vec![Some("Kepler-1".into())]))
            .unwrap();
        catalog
            .set_column("star_mass", Column::Numeric(vec![Some(1.0)]))
            .unwrap();
        catalog
            .set_column("orbital_period", Column::Numeric(vec![Some(365.25)]))
            .unwrap();

        let mut pipeline = Pipeline::new();
        pipeline.push(RowCalculation::new("semi_major_axis", SemiMajorAxisCalc));
        let bare = pipeline.run(&catalog).unwrap();
        assert_eq!(bare.numeric("semi_major_axis_error_min").unwrap()[0], None);

        let mut pipeline = Pipeline::new();
        pipeline.push(ErrorFill::new("star_mass"));
        pipeline.push(ErrorFill::new("orbital_period"));
        pipeline.push(RowCalculation::new("semi_major_axis", SemiMajorAxisCalc));
        let filled = pipeline.run(&catalog).unwrap();
        assert!(filled.numeric("semi_major_axis_error_min").unwrap()[0].is_some());
    }
}
