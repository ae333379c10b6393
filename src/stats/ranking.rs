//! Ranking Queries Module
//! Group-by / sort / top-N queries that feed the dashboard charts.
//!
//! All queries are pure: they read the shared [`ProductTable`] and build a
//! fresh [`DerivedTable`]. Ordering is descending by value; equal values keep
//! the order in which their key first appears in the table.

use super::TopN;
use crate::data::columns::{CATEGORY, DISCOUNT, PRODUCT_NAME, RATING, RATING_COUNT};
use crate::data::ProductTable;
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One (key, value) pair of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub value: f64,
}

/// Ordered output of a ranking query, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTable {
    /// Stable per query; does not change with the requested count.
    pub id: &'static str,
    pub title: String,
    pub key_label: &'static str,
    pub value_label: &'static str,
    pub entries: Vec<RankedEntry>,
}

impl DerivedTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

/// Ranking queries over the product table.
pub struct Ranking;

impl Ranking {
    /// Categories ordered by the sum of their ratings. Null ratings add nothing.
    ///
    /// Like every category query, only rows with both a category and a
    /// product name take part.
    pub fn top_categories_by_total_rating(
        table: &ProductTable,
        n: TopN,
    ) -> Result<DerivedTable, RankingError> {
        let ranked = table
            .frame()
            .clone()
            .lazy()
            .filter(Self::groupable())
            .group_by_stable([col(CATEGORY)])
            .agg([col(RATING).sum()])
            .sort_by_exprs(vec![col(RATING)], Self::descending())
            .limit(n.as_idx())
            .collect()?;

        Ok(DerivedTable {
            id: "total_rating",
            title: format!("Top {} Categories by Total Ratings", n.get()),
            key_label: "Category",
            value_label: "Total rating",
            entries: Self::entries(&ranked, CATEGORY, RATING)?,
        })
    }

    /// Categories ordered by mean discount percentage.
    ///
    /// Null discounts are left out of both numerator and denominator; a
    /// category with no discount at all has no mean and is not listed.
    pub fn top_categories_by_average_discount(
        table: &ProductTable,
        n: TopN,
    ) -> Result<DerivedTable, RankingError> {
        let ranked = table
            .frame()
            .clone()
            .lazy()
            .filter(Self::groupable())
            .group_by_stable([col(CATEGORY)])
            .agg([col(DISCOUNT).mean()])
            .filter(col(DISCOUNT).is_not_null())
            .sort_by_exprs(vec![col(DISCOUNT)], Self::descending())
            .limit(n.as_idx())
            .collect()?;

        Ok(DerivedTable {
            id: "average_discount",
            title: format!("Top {} Categories by Average Discount %", n.get()),
            key_label: "Category",
            value_label: "Average discount %",
            entries: Self::entries(&ranked, CATEGORY, DISCOUNT)?,
        })
    }

    /// Individual products ordered by review count. Rows are never merged,
    /// so duplicate product names in the table stay duplicated here.
    pub fn top_products_by_review_count(
        table: &ProductTable,
        n: TopN,
    ) -> Result<DerivedTable, RankingError> {
        let ranked = table
            .frame()
            .clone()
            .lazy()
            .filter(
                col(PRODUCT_NAME)
                    .is_not_null()
                    .and(col(RATING_COUNT).is_not_null()),
            )
            .select([col(PRODUCT_NAME), col(RATING_COUNT)])
            .sort_by_exprs(vec![col(RATING_COUNT)], Self::descending())
            .limit(n.as_idx())
            .collect()?;

        Ok(DerivedTable {
            id: "most_reviewed",
            title: format!("Top {} Most Reviewed Products", n.get()),
            key_label: "Product",
            value_label: "Reviews",
            entries: Self::entries(&ranked, PRODUCT_NAME, RATING_COUNT)?,
        })
    }

    /// Rows allowed into a category grouping.
    fn groupable() -> Expr {
        col(CATEGORY)
            .is_not_null()
            .and(col(PRODUCT_NAME).is_not_null())
    }

    /// Stable descending order.
    fn descending() -> SortMultipleOptions {
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_nulls_last(true)
            .with_maintain_order(true)
    }

    fn entries(df: &DataFrame, key: &str, value: &str) -> Result<Vec<RankedEntry>, RankingError> {
        let keys = df.column(key)?.str()?;
        let values = df.column(value)?.f64()?;

        Ok(keys
            .into_iter()
            .zip(values)
            .filter_map(|(k, v)| {
                Some(RankedEntry {
                    key: k?.to_string(),
                    value: v?,
                })
            })
            .collect())
    }
}
