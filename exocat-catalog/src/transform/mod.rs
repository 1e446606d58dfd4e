//! Catalog transforms.
//!
//! Every transform reads a catalog snapshot and returns a new one. Rows are
//! never dropped and columns outside the transform's target are copied
//! through untouched.
//!
//! | Transform | Writes |
//! |-----------|--------|
//! | [`RowCalculation`] | a calculator's output, row by row, where undefined |
//! | [`StarRecompute`] | a per-star aggregate into every row of stars with a gap |
//! | [`SpectralTeffFill`] | effective temperature looked up from spectral type |
//! | [`ErrorFill`] | missing error bounds of an existing value column |

pub mod calculation;
pub mod fill;
pub mod inputs;
pub mod pipeline;

pub use calculation::{RowCalculation, StarRecompute};
pub use fill::{ErrorFill, SpectralTeffFill};
pub use inputs::{ColumnMap, FromCatalog, Role};
pub use pipeline::Pipeline;

use crate::catalog::Catalog;
use crate::error::Result;

pub trait Transform {
    fn name(&self) -> &str;
    fn description(&self) -> String;
    fn apply(&self, catalog: &Catalog) -> Result<Catalog>;
}

/// Per-row outcome counts of one transform pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Rows given a new value.
    pub filled: usize,
    /// Rows whose value was already defined.
    pub kept: usize,
    /// Rows left undefined for lack of inputs.
    pub undefined: usize,
}
