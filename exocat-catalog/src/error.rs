use exocat_core::ExoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("missing column: {column}")]
    MissingColumn { column: String },

    #[error("column {column} is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("column {column} has {found} rows, catalog has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] ExoError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn column_type(column: impl Into<String>, expected: &'static str) -> Self {
        Self::ColumnType {
            column: column.into(),
            expected,
        }
    }

    pub fn length_mismatch(column: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            column: column.into(),
            expected,
            found,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Errors caused by the shape of the input catalog rather than by
    /// configuration or I/O. Dropping the step that raised one lets the rest
    /// of a pipeline run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::ColumnType { .. })
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            CatalogError::missing_column("star_teff").to_string(),
            "missing column: star_teff"
        );
        assert_eq!(
            CatalogError::column_type("star_name", "text").to_string(),
            "column star_name is not text"
        );
        assert_eq!(
            CatalogError::length_mismatch("mass", 3, 2).to_string(),
            "column mass has 2 rows, catalog has 3"
        );
    }

    #[test]
    fn core_errors_pass_through() {
        let err: CatalogError = ExoError::unknown_temp_type("avg").into();
        assert_eq!(err.to_string(), ExoError::unknown_temp_type("avg").to_string());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn recoverable() {
        assert!(CatalogError::missing_column("albedo").is_recoverable());
        assert!(CatalogError::column_type("mass", "numeric").is_recoverable());
        assert!(!CatalogError::config("bad step").is_recoverable());
        assert!(!CatalogError::length_mismatch("mass", 3, 2).is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<CatalogError>();
        _assert_sync::<CatalogError>();
    }
}
