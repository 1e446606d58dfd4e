//! Error types for measure derivation.
//!
//! Data gaps are not errors here: a missing input or a division by an
//! undefined value yields `None` and the caller moves on. [`ExoError`] is
//! reserved for configuration mistakes that should stop a pass.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`UnknownTempType`](ExoError::UnknownTempType) | Temperature selector other than `mean`/`min`/`max` |
//! | [`InvalidSpectralRange`](ExoError::InvalidSpectralRange) | Coarse spectral range with `low >= high` or an unknown letter |
//! | [`InvalidInterval`](ExoError::InvalidInterval) | Interval table key with `min >= max` |
//!
//! # Usage
//!
//! ```
//! use exocat_core::{ExoError, TempType};
//!
//! let err = "avg".parse::<TempType>().unwrap_err();
//! assert!(matches!(err, ExoError::UnknownTempType { .. }));
//! ```

use thiserror::Error;

/// Configuration errors raised while building calculators and tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExoError {
    /// Temperature selector is not one of `mean`, `min`, `max`.
    #[error("Unknown temperature type \"{given}\": expected \"min\", \"mean\" or \"max\"")]
    UnknownTempType { given: String },

    /// Coarse spectral-class range cannot be expanded into a table.
    #[error("Invalid spectral range for class {letter}: {message}")]
    InvalidSpectralRange { letter: String, message: String },

    /// Interval table key is empty or reversed.
    #[error("Invalid interval ({min}, {max}]: {message}")]
    InvalidInterval { min: f64, max: f64, message: String },
}

/// Convenience alias for `Result<T, ExoError>`.
pub type ExoResult<T> = Result<T, ExoError>;

impl ExoError {
    pub fn unknown_temp_type(given: impl Into<String>) -> Self {
        Self::UnknownTempType {
            given: given.into(),
        }
    }

    pub fn invalid_spectral_range(letter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpectralRange {
            letter: letter.into(),
            message: message.into(),
        }
    }

    pub fn invalid_interval(min: f64, max: f64, message: impl Into<String>) -> Self {
        Self::InvalidInterval {
            min,
            max,
            message: message.into(),
        }
    }
}
