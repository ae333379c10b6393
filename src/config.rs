//! Dashboard Configuration Module
//! Data source location, column mapping and default ranking sizes.

use crate::stats::TopN;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default dataset produced by the upstream cleaning step.
pub const DEFAULT_DATA_PATH: &str = "cleaned_amazon_data.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source column names for each product attribute.
///
/// The loader renames these to the canonical names in [`crate::data::columns`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub category: String,
    pub product_name: String,
    pub rating: String,
    pub discount_percentage: String,
    pub actual_price: String,
    pub discounted_price: String,
    pub rating_count: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        use crate::data::columns;
        Self {
            category: columns::CATEGORY.to_string(),
            product_name: columns::PRODUCT_NAME.to_string(),
            rating: columns::RATING.to_string(),
            discount_percentage: columns::DISCOUNT.to_string(),
            actual_price: columns::ACTUAL_PRICE.to_string(),
            discounted_price: columns::DISCOUNTED_PRICE.to_string(),
            rating_count: columns::RATING_COUNT.to_string(),
        }
    }
}

impl ColumnNames {
    /// (source, canonical) pairs for the label columns.
    pub fn text_columns(&self) -> [(&str, &'static str); 2] {
        use crate::data::columns;
        [
            (self.category.as_str(), columns::CATEGORY),
            (self.product_name.as_str(), columns::PRODUCT_NAME),
        ]
    }

    /// (source, canonical) pairs for the measure columns.
    pub fn numeric_columns(&self) -> [(&str, &'static str); 5] {
        use crate::data::columns;
        [
            (self.rating.as_str(), columns::RATING),
            (self.discount_percentage.as_str(), columns::DISCOUNT),
            (self.actual_price.as_str(), columns::ACTUAL_PRICE),
            (self.discounted_price.as_str(), columns::DISCOUNTED_PRICE),
            (self.rating_count.as_str(), columns::RATING_COUNT),
        ]
    }
}

/// User-facing settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Initial position of the category sliders.
    pub default_top_n: i64,
    /// Fixed size of the most-reviewed products ranking.
    pub products_top_n: i64,
    pub columns: ColumnNames,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_top_n: TopN::DEFAULT.get() as i64,
            products_top_n: TopN::PRODUCTS.get() as i64,
            columns: ColumnNames::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_top_n(&self) -> TopN {
        TopN::clamped(self.default_top_n)
    }

    pub fn products_top_n(&self) -> TopN {
        TopN::clamped(self.products_top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_cleaned_dataset() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("cleaned_amazon_data.csv"));
        assert_eq!(config.default_top_n().get(), 5);
        assert_eq!(config.products_top_n().get(), 5);
        assert_eq!(config.columns.category, "main_category");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_path": "data/products.csv", "columns": {{"category": "cat"}}}}"#
        )
        .unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/products.csv"));
        assert_eq!(config.columns.category, "cat");
        assert_eq!(config.columns.rating, "rating");
        assert_eq!(config.default_top_n, 5);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let config = DashboardConfig {
            default_top_n: 0,
            products_top_n: 42,
            ..Default::default()
        };
        assert_eq!(config.default_top_n().get(), 1);
        assert_eq!(config.products_top_n().get(), 9);
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = DashboardConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
