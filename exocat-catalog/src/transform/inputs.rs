//! Binding calculator input roles to catalog columns.
//!
//! Each calculator input struct names its roles and the column each reads by
//! default. A [`ColumnMap`] is resolved once, when a transform is built, so an
//! override for a role the calculator does not have is rejected up front.

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use exocat_core::measure::{
    Albedo, Eccentricity, OrbitalPeriod, SemiMajorAxis, StarMass, StarRadius, StarTeff,
};
use exocat_core::{
    EquilibriumTempInputs, Measure, Quantity, SemiMajorAxisInputs, StarMassInputs,
};
use std::collections::BTreeMap;

/// A calculator input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub name: &'static str,
    pub default_column: &'static str,
    /// Optional roles read as absent when their column is not in the catalog.
    pub required: bool,
}

impl Role {
    const fn required<Q: Quantity>(name: &'static str) -> Self {
        Self {
            name,
            default_column: Q::NAME,
            required: true,
        }
    }

    const fn optional<Q: Quantity>(name: &'static str) -> Self {
        Self {
            name,
            default_column: Q::NAME,
            required: false,
        }
    }
}

/// Resolved role → column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<&'static str, String>,
}

impl ColumnMap {
    /// Default columns for `roles`, with `overrides` applied.
    pub fn resolve(roles: &'static [Role], overrides: &BTreeMap<String, String>) -> Result<Self> {
        for role in overrides.keys() {
            if !roles.iter().any(|r| r.name == role) {
                let known: Vec<&str> = roles.iter().map(|r| r.name).collect();
                return Err(CatalogError::config(format!(
                    "unknown input role \"{}\", expected one of: {}",
                    role,
                    known.join(", ")
                )));
            }
        }
        let columns = roles
            .iter()
            .map(|r| {
                let column = overrides
                    .get(r.name)
                    .cloned()
                    .unwrap_or_else(|| r.default_column.to_string());
                (r.name, column)
            })
            .collect();
        Ok(Self { columns })
    }

    pub fn defaults(roles: &'static [Role]) -> Self {
        Self {
            columns: roles
                .iter()
                .map(|r| (r.name, r.default_column.to_string()))
                .collect(),
        }
    }

    /// Column bound to `role`; the role name itself if it was never resolved.
    pub fn column<'a>(&'a self, role: &'a str) -> &'a str {
        self.columns.get(role).map(String::as_str).unwrap_or(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(role, col)| (*role, col.as_str()))
    }
}

/// Input struct that can be read row by row from a catalog.
pub trait FromCatalog: Sized {
    const ROLES: &'static [Role];

    /// One input per catalog row.
    fn from_catalog(catalog: &Catalog, columns: &ColumnMap) -> Result<Vec<Self>>;

    /// Fails on the first required role whose column the catalog lacks.
    fn check_columns(catalog: &Catalog, columns: &ColumnMap) -> Result<()> {
        match Self::ROLES
            .iter()
            .filter(|role| role.required)
            .map(|role| columns.column(role.name))
            .find(|column| !catalog.has_column(column))
        {
            Some(column) => Err(CatalogError::missing_column(column)),
            None => Ok(()),
        }
    }
}

fn required<Q: Quantity>(
    catalog: &Catalog,
    columns: &ColumnMap,
    role: &str,
) -> Result<Vec<Measure<Q>>> {
    catalog.measures(columns.column(role))
}

fn optional<Q: Quantity>(
    catalog: &Catalog,
    columns: &ColumnMap,
    role: &str,
) -> Result<Option<Vec<Measure<Q>>>> {
    let column = columns.column(role);
    if catalog.has_column(column) {
        catalog.measures(column).map(Some)
    } else {
        Ok(None)
    }
}

impl FromCatalog for SemiMajorAxisInputs {
    const ROLES: &'static [Role] = &[
        Role::required::<StarMass>("star_mass"),
        Role::required::<OrbitalPeriod>("orbital_period"),
    ];

    fn from_catalog(catalog: &Catalog, columns: &ColumnMap) -> Result<Vec<Self>> {
        let star_mass = required::<StarMass>(catalog, columns, "star_mass")?;
        let period = required::<OrbitalPeriod>(catalog, columns, "orbital_period")?;
        Ok(star_mass
            .into_iter()
            .zip(period)
            .map(|(star_mass, orbital_period)| Self {
                star_mass,
                orbital_period,
            })
            .collect())
    }
}

impl FromCatalog for StarMassInputs {
    const ROLES: &'static [Role] = &[
        Role::required::<SemiMajorAxis>("semi_major_axis"),
        Role::required::<OrbitalPeriod>("orbital_period"),
    ];

    fn from_catalog(catalog: &Catalog, columns: &ColumnMap) -> Result<Vec<Self>> {
        let axis = required::<SemiMajorAxis>(catalog, columns, "semi_major_axis")?;
        let period = required::<OrbitalPeriod>(catalog, columns, "orbital_period")?;
        Ok(axis
            .into_iter()
            .zip(period)
            .map(|(semi_major_axis, orbital_period)| Self {
                semi_major_axis,
                orbital_period,
            })
            .collect())
    }
}

impl FromCatalog for EquilibriumTempInputs {
    const ROLES: &'static [Role] = &[
        Role::required::<StarTeff>("star_teff"),
        Role::required::<StarRadius>("star_radius"),
        Role::required::<SemiMajorAxis>("semi_major_axis"),
        Role::optional::<Albedo>("albedo"),
        Role::optional::<Eccentricity>("eccentricity"),
    ];

    fn from_catalog(catalog: &Catalog, columns: &ColumnMap) -> Result<Vec<Self>> {
        let teff = required::<StarTeff>(catalog, columns, "star_teff")?;
        let radius = required::<StarRadius>(catalog, columns, "star_radius")?;
        let axis = required::<SemiMajorAxis>(catalog, columns, "semi_major_axis")?;
        let albedo = optional::<Albedo>(catalog, columns, "albedo")?;
        let eccentricity = optional::<Eccentricity>(catalog, columns, "eccentricity")?;

        Ok((0..catalog.len())
            .map(|row| Self {
                star_teff: teff[row],
                star_radius: radius[row],
                semi_major_axis: axis[row],
                albedo: albedo.as_ref().map(|col| col[row]),
                eccentricity: eccentricity.as_ref().map(|col| col[row]),
            })
            .collect())
    }
}
