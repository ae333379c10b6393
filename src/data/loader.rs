//! CSV Data Loader Module
//! Reads the cleaned product CSV with Polars and normalizes it into a
//! [`ProductTable`]. The table is loaded once per process and shared.

use super::table::present;
use super::ProductTable;
use crate::config::ColumnNames;
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Every variant means the dataset is unavailable; none is retried.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data unavailable: {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("Data unavailable: failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Data unavailable: missing required column '{0}'")]
    MissingColumn(String),
    #[error("Data unavailable: column '{column}' holds non-numeric data ({dtype})")]
    NonNumericColumn { column: String, dtype: String },
}

static SHARED_TABLE: OnceLock<ProductTable> = OnceLock::new();

/// Load the product table for the lifetime of the process.
///
/// The first successful call reads `path`; later calls return the same
/// instance and ignore their arguments. Failed loads are not cached.
pub fn load_shared(
    path: &Path,
    columns: &ColumnNames,
) -> Result<&'static ProductTable, LoaderError> {
    if let Some(table) = SHARED_TABLE.get() {
        debug!("Product table already loaded, reusing cached instance");
        return Ok(table);
    }

    let table = DataLoader::new(path, columns.clone()).load()?;
    Ok(SHARED_TABLE.get_or_init(|| table))
}

/// Handles CSV loading with Polars.
pub struct DataLoader {
    path: PathBuf,
    columns: ColumnNames,
}

impl DataLoader {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnNames) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    /// Read and validate the CSV file.
    pub fn load(&self) -> Result<ProductTable, LoaderError> {
        if !self.path.is_file() {
            return Err(LoaderError::NotFound(self.path.clone()));
        }

        let raw = LazyCsvReader::new(&self.path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        let table = Self::normalize(&raw, &self.columns)?;
        info!(
            "Loaded {} products in {} categories from {}",
            table.len(),
            table.category_count(),
            self.path.display()
        );
        Ok(table)
    }

    /// Select the required columns, rename them to canonical names and fix
    /// their types: labels as `String`, measures as `Float64`. A `NaN` cell
    /// becomes null so it is skipped like an empty one.
    pub fn normalize(raw: &DataFrame, names: &ColumnNames) -> Result<ProductTable, LoaderError> {
        let mut columns: Vec<Column> = Vec::with_capacity(7);

        for (source, canonical) in names.text_columns() {
            let series = Self::required(raw, source)?;
            let text = series.cast(&DataType::String)?;
            columns.push(Column::from(text.with_name(canonical.into())));
        }

        for (source, canonical) in names.numeric_columns() {
            let series = Self::required(raw, source)?;
            let dtype = series.dtype();
            let numbers = series.strict_cast(&DataType::Float64).map_err(|_| {
                LoaderError::NonNumericColumn {
                    column: source.to_string(),
                    dtype: dtype.to_string(),
                }
            })?;
            let cleaned: Float64Chunked = numbers.f64()?.into_iter().map(present).collect();
            columns.push(Column::from(
                cleaned.with_name(canonical.into()).into_series(),
            ));
        }

        Ok(ProductTable::from_normalized(DataFrame::new(columns)?))
    }

    fn required<'a>(raw: &'a DataFrame, name: &str) -> Result<&'a Series, LoaderError> {
        raw.column(name)
            .map(|col| col.as_materialized_series())
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))
    }
}
