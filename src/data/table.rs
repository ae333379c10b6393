//! Product Table Module
//! Immutable in-memory table of product records, stored as a Polars DataFrame
//! with canonical column names.

use super::columns::{
    ACTUAL_PRICE, CATEGORY, DISCOUNT, DISCOUNTED_PRICE, PRODUCT_NAME, RATING, RATING_COUNT,
};
use polars::prelude::*;

/// One product row. Every field may be missing in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    pub category: Option<String>,
    pub product_name: Option<String>,
    pub rating: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub actual_price: Option<f64>,
    pub discounted_price: Option<f64>,
    pub rating_count: Option<f64>,
}

impl ProductRecord {
    pub fn new(category: &str, product_name: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            product_name: Some(product_name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_discount(mut self, discount_percentage: Option<f64>) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }

    pub fn with_prices(mut self, actual_price: f64, discounted_price: f64) -> Self {
        self.actual_price = Some(actual_price);
        self.discounted_price = Some(discounted_price);
        self
    }

    pub fn with_rating_count(mut self, rating_count: f64) -> Self {
        self.rating_count = Some(rating_count);
        self
    }
}

/// The loaded product table.
///
/// Holds exactly the seven canonical columns: two `String` label columns and
/// five `Float64` measure columns. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct ProductTable {
    df: DataFrame,
}

impl ProductTable {
    /// Wrap a DataFrame that already carries the canonical schema.
    pub(crate) fn from_normalized(df: DataFrame) -> Self {
        Self { df }
    }

    /// Build a table from in-memory records. NaN measures are stored as null.
    pub fn from_records(records: &[ProductRecord]) -> PolarsResult<Self> {
        let categories: Vec<Option<&str>> =
            records.iter().map(|r| r.category.as_deref()).collect();
        let names: Vec<Option<&str>> =
            records.iter().map(|r| r.product_name.as_deref()).collect();
        let ratings = measure(records, |r| r.rating);
        let discounts = measure(records, |r| r.discount_percentage);
        let actual = measure(records, |r| r.actual_price);
        let discounted = measure(records, |r| r.discounted_price);
        let counts = measure(records, |r| r.rating_count);

        let df = DataFrame::new(vec![
            Column::new(CATEGORY.into(), categories),
            Column::new(PRODUCT_NAME.into(), names),
            Column::new(RATING.into(), ratings),
            Column::new(DISCOUNT.into(), discounts),
            Column::new(ACTUAL_PRICE.into(), actual),
            Column::new(DISCOUNTED_PRICE.into(), discounted),
            Column::new(RATING_COUNT.into(), counts),
        ])?;

        Ok(Self { df })
    }

    /// An empty table with the canonical schema.
    pub fn empty() -> Self {
        // Seven empty columns of matching length cannot fail.
        Self::from_records(&[]).unwrap_or_else(|_| Self {
            df: DataFrame::empty(),
        })
    }

    /// Read-only access to the underlying DataFrame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of product rows.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Number of distinct non-null categories.
    pub fn category_count(&self) -> usize {
        self.df
            .column(CATEGORY)
            .ok()
            .and_then(|col| col.as_materialized_series().drop_nulls().n_unique().ok())
            .unwrap_or(0)
    }
}

fn measure(
    records: &[ProductRecord],
    pick: impl Fn(&ProductRecord) -> Option<f64>,
) -> Vec<Option<f64>> {
    records.iter().map(|r| present(pick(r))).collect()
}

/// A measure that is NaN counts as missing.
pub(crate) fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_become_canonical_columns() {
        let table = ProductTable::from_records(&[
            ProductRecord::new("Electronics", "Cable").with_rating(4.2),
            ProductRecord::new("Books", "Novel").with_discount(Some(15.0)),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.frame().get_column_names_str(),
            vec![
                CATEGORY,
                PRODUCT_NAME,
                RATING,
                DISCOUNT,
                ACTUAL_PRICE,
                DISCOUNTED_PRICE,
                RATING_COUNT
            ]
        );
        assert_eq!(table.frame().column(RATING).unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn category_count_ignores_nulls_and_duplicates() {
        let table = ProductTable::from_records(&[
            ProductRecord::new("Electronics", "A"),
            ProductRecord::new("Electronics", "B"),
            ProductRecord::new("Books", "C"),
            ProductRecord {
                product_name: Some("D".into()),
                ..Default::default()
            },
        ])
        .unwrap();

        assert_eq!(table.category_count(), 2);
    }

    #[test]
    fn nan_measures_are_stored_as_null() {
        let table = ProductTable::from_records(&[
            ProductRecord::new("Books", "Novel")
                .with_rating(f64::NAN)
                .with_discount(Some(f64::NAN)),
            ProductRecord::new("Books", "Atlas").with_rating(4.0),
        ])
        .unwrap();

        let ratings = table.frame().column(RATING).unwrap();
        assert_eq!(ratings.null_count(), 1);
        assert_eq!(ratings.f64().unwrap().get(1), Some(4.0));
        assert_eq!(table.frame().column(DISCOUNT).unwrap().null_count(), 2);
    }

    #[test]
    fn empty_table_has_schema_and_no_rows() {
        let table = ProductTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.frame().width(), 7);
        assert_eq!(table.category_count(), 0);
    }
}
