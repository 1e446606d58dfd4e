//! Gap-filling passes over exoplanet catalog tables.
//!
//! Reads a catalog with one row per planet, derives missing quantities with
//! the calculators of `exocat-core`, and writes each result back as a value
//! column plus two error columns. Values already present are never
//! second-guessed; rows that lack inputs stay undefined rather than failing
//! the pass.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`Catalog`] columns, measure read/write, star grouping |
//! | [`transform`] | [`Transform`] trait, row and per-star calculations, fills, [`Pipeline`] |
//! | [`config`] | TOML [`PipelineConfig`] and the standard pass |
//! | [`csv_io`] | CSV reader and writer |
//!
//! # Quick Start
//!
//! ```ignore
//! use exocat_catalog::{csv_io, Pipeline};
//!
//! let catalog = csv_io::read_csv_path("planets.csv")?;
//! let filled = Pipeline::standard()?.run(&catalog)?;
//! csv_io::write_csv_path(&filled, "planets_filled.csv")?;
//! ```
//!
//! # Features
//!
//! - **`cli`** (default): enables the `exocat` binary.

pub mod catalog;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod transform;

pub use catalog::{Catalog, Column};
pub use config::{PipelineConfig, StepConfig};
pub use error::{CatalogError, Result};
pub use transform::{
    ErrorFill, Pipeline, RowCalculation, SpectralTeffFill, StarRecompute, Transform,
};
