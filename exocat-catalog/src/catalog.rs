//! Column-oriented catalog table.
//!
//! Rows are planets, identified only by position. Every quantity `X` lives in
//! up to three numeric columns: `X`, `X_error_min` and `X_error_max`. Text
//! columns such as `star_name` and `star_sp_type` sit alongside them.
//!
//! A [`Catalog`] is never edited by a transform. Writing measures returns a
//! new catalog, leaving the input snapshot untouched.

use crate::error::{CatalogError, Result};
use exocat_core::{Measure, Quantity};
use std::collections::{BTreeMap, HashMap};

/// Host star grouping column.
pub const STAR_NAME: &str = "star_name";

/// Raw spectral type column.
pub const STAR_SP_TYPE: &str = "star_sp_type";

const ERROR_MIN_SUFFIX: &str = "_error_min";
const ERROR_MAX_SUFFIX: &str = "_error_max";

pub fn error_min_column(name: &str) -> String {
    format!("{}{}", name, ERROR_MIN_SUFFIX)
}

pub fn error_max_column(name: &str) -> String {
    format!("{}{}", name, ERROR_MAX_SUFFIX)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Text(_) => "text",
        }
    }

    /// Cell rendered for output, `None` when empty.
    pub fn cell(&self, row: usize) -> Option<String> {
        match self {
            Self::Numeric(values) => values.get(row).copied().flatten().map(|v| v.to_string()),
            Self::Text(values) => values.get(row).cloned().flatten(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    names: Vec<String>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty catalog with a fixed row count, for building column by column.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    /// Adds `column`, or replaces an existing one of the same name in place.
    ///
    /// The first column of an empty, zero-row catalog fixes the row count.
    pub fn set_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.columns.is_empty() && self.rows == 0 {
            self.rows = column.len();
        }
        if column.len() != self.rows {
            return Err(CatalogError::length_mismatch(name, self.rows, column.len()));
        }
        match self.index.get(&name) {
            Some(&i) => self.columns[i] = column,
            None => {
                self.index.insert(name.clone(), self.columns.len());
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }

    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>]> {
        match self.column(name) {
            Some(Column::Numeric(values)) => Ok(values),
            Some(Column::Text(_)) => Err(CatalogError::column_type(name, "numeric")),
            None => Err(CatalogError::missing_column(name)),
        }
    }

    pub fn text(&self, name: &str) -> Result<&[Option<String>]> {
        match self.column(name) {
            Some(Column::Text(values)) => Ok(values),
            Some(Column::Numeric(_)) => Err(CatalogError::column_type(name, "text")),
            None => Err(CatalogError::missing_column(name)),
        }
    }

    /// Measures read from `name` and its two error columns.
    ///
    /// The value column must exist; absent error columns read as undefined.
    pub fn measures<Q: Quantity>(&self, name: &str) -> Result<Vec<Measure<Q>>> {
        let values = self.numeric(name)?;
        let err_min = self.optional_numeric(&error_min_column(name))?;
        let err_max = self.optional_numeric(&error_max_column(name))?;
        Ok((0..self.rows)
            .map(|row| {
                Measure::new(
                    values[row],
                    err_min.and_then(|col| col[row]),
                    err_max.and_then(|col| col[row]),
                )
            })
            .collect())
    }

    /// Like [`measures`](Self::measures), but an absent value column reads as
    /// all undefined.
    pub fn measures_or_undefined<Q: Quantity>(&self, name: &str) -> Result<Vec<Measure<Q>>> {
        if self.has_column(name) {
            self.measures(name)
        } else {
            Ok(vec![Measure::undefined(); self.rows])
        }
    }

    /// New catalog with `measures` written to `name` and its error columns.
    pub fn with_measures<Q: Quantity>(&self, name: &str, measures: &[Measure<Q>]) -> Result<Self> {
        if measures.len() != self.rows {
            return Err(CatalogError::length_mismatch(name, self.rows, measures.len()));
        }
        let mut out = self.clone();
        out.set_column(name, Column::Numeric(measures.iter().map(|m| m.val()).collect()))?;
        out.set_column(
            error_min_column(name),
            Column::Numeric(measures.iter().map(|m| m.err_min()).collect()),
        )?;
        out.set_column(
            error_max_column(name),
            Column::Numeric(measures.iter().map(|m| m.err_max()).collect()),
        )?;
        Ok(out)
    }

    /// Row indices per host star, ordered by star name.
    ///
    /// Rows with no star name belong to no group.
    pub fn star_groups(&self) -> Result<BTreeMap<&str, Vec<usize>>> {
        let names = self.text(STAR_NAME)?;
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (row, name) in names.iter().enumerate() {
            if let Some(name) = name.as_deref() {
                groups.entry(name).or_default().push(row);
            }
        }
        Ok(groups)
    }

    fn optional_numeric(&self, name: &str) -> Result<Option<&[Option<f64>]>> {
        if self.has_column(name) {
            self.numeric(name).map(Some)
        } else {
            Ok(None)
        }
    }
}
