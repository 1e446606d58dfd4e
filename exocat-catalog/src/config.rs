//! Pipeline configuration.
//!
//! A pipeline is a TOML list of `[[step]]` tables run in order. Each step
//! names its `kind`; calculator steps may rebind input roles to other columns
//! and write to another target.
//!
//! ```toml
//! [[step]]
//! kind = "error_fill"
//! columns = ["star_mass", "orbital_period"]
//!
//! [[step]]
//! kind = "semi_major_axis"
//!
//! [[step]]
//! kind = "equilibrium_temp"
//! ttype = "min"
//! target = "temp_periastron"
//!
//! [step.columns]
//! star_teff = "teff_spectroscopic"
//! ```

use crate::catalog::STAR_SP_TYPE;
use crate::error::{CatalogError, Result};
use exocat_core::constants::DEFAULT_STAR_TEFF_ERR;
use exocat_core::measure::{
    Eccentricity, Mass, OrbitalPeriod, Radius, SemiMajorAxis, StarMass, StarRadius, StarTeff,
};
use exocat_core::{Quantity, TempType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepConfig {
    /// Complete error bounds, from value precision or a constant.
    ErrorFill {
        columns: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constant: Option<f64>,
    },
    SpectralTeff {
        #[serde(default = "default_sp_source")]
        source: String,
        #[serde(default = "default_teff_target")]
        target: String,
    },
    SemiMajorAxis {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        columns: BTreeMap<String, String>,
    },
    EquilibriumTemp {
        /// `mean`, `min` or `max`; checked when the pipeline is built.
        #[serde(default = "default_ttype")]
        ttype: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        columns: BTreeMap<String, String>,
    },
    /// Per-star recompute from every planet's orbit.
    StarMass {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        columns: BTreeMap<String, String>,
    },
}

fn default_sp_source() -> String {
    STAR_SP_TYPE.to_string()
}

fn default_teff_target() -> String {
    StarTeff::NAME.to_string()
}

fn default_ttype() -> String {
    TempType::Mean.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default, rename = "step")]
    pub steps: Vec<StepConfig>,
}

impl PipelineConfig {
    /// The standard gap-filling pass.
    ///
    /// Errors are completed first so calculators see both bounds. Stellar
    /// temperatures come from the spectral type before their ±100 K default
    /// error is applied. Semi-major axes are derived before star masses,
    /// which are then unified per star ahead of the temperature step.
    pub fn standard() -> Self {
        let precision_columns = [
            StarMass::NAME,
            StarRadius::NAME,
            OrbitalPeriod::NAME,
            SemiMajorAxis::NAME,
            Eccentricity::NAME,
            Mass::NAME,
            Radius::NAME,
        ];
        Self {
            steps: vec![
                StepConfig::ErrorFill {
                    columns: precision_columns.iter().map(|c| c.to_string()).collect(),
                    constant: None,
                },
                StepConfig::SpectralTeff {
                    source: default_sp_source(),
                    target: default_teff_target(),
                },
                StepConfig::ErrorFill {
                    columns: vec![StarTeff::NAME.to_string()],
                    constant: Some(DEFAULT_STAR_TEFF_ERR),
                },
                StepConfig::SemiMajorAxis {
                    target: None,
                    columns: BTreeMap::new(),
                },
                StepConfig::StarMass {
                    target: None,
                    columns: BTreeMap::new(),
                },
                StepConfig::EquilibriumTemp {
                    ttype: default_ttype(),
                    target: None,
                    columns: BTreeMap::new(),
                },
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.steps.is_empty() {
            return Err(CatalogError::config("pipeline has no [[step]] entries"));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CatalogError::config(e.to_string()))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
