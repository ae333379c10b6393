//! Dashboard Module
//! Maps the selected [`Section`] to the derived tables it displays.
//!
//! A [`SectionView`] is rebuilt from the shared table on every navigation
//! or slider change and dropped once drawn.

use crate::data::columns::{ACTUAL_PRICE, DISCOUNT, DISCOUNTED_PRICE};
use crate::data::ProductTable;
use crate::nav::Section;
use crate::stats::{DerivedTable, Ranking, RankingError, ScatterSeries, TopN};
use log::debug;
use serde::Serialize;

/// User-adjustable counts feeding the rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionParams {
    pub rating_top_n: TopN,
    pub discount_top_n: TopN,
    pub products_top_n: TopN,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            rating_top_n: TopN::DEFAULT,
            discount_top_n: TopN::DEFAULT,
            products_top_n: TopN::PRODUCTS,
        }
    }
}

/// Size of the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub products: usize,
    pub categories: usize,
}

impl DatasetSummary {
    pub fn of(table: &ProductTable) -> Self {
        Self {
            products: table.len(),
            categories: table.category_count(),
        }
    }
}

/// Everything one section needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "kebab-case")]
pub enum SectionView {
    Categories {
        by_total_rating: DerivedTable,
        by_average_discount: DerivedTable,
    },
    Products {
        most_reviewed: DerivedTable,
    },
    AboutData {
        summary: DatasetSummary,
        price_vs_rating: ScatterSeries,
        discount_vs_rating: ScatterSeries,
        discounted_price_vs_rating: ScatterSeries,
    },
}

impl SectionView {
    /// Run the queries for `section`.
    pub fn compute(
        table: &ProductTable,
        section: Section,
        params: SectionParams,
    ) -> Result<Self, RankingError> {
        debug!("Computing {section} view with {params:?}");

        let view = match section {
            Section::Categories => SectionView::Categories {
                by_total_rating: Ranking::top_categories_by_total_rating(
                    table,
                    params.rating_top_n,
                )?,
                by_average_discount: Ranking::top_categories_by_average_discount(
                    table,
                    params.discount_top_n,
                )?,
            },
            Section::Products => SectionView::Products {
                most_reviewed: Ranking::top_products_by_review_count(
                    table,
                    params.products_top_n,
                )?,
            },
            Section::AboutData => SectionView::AboutData {
                summary: DatasetSummary::of(table),
                price_vs_rating: ScatterSeries::against_rating(
                    table,
                    ACTUAL_PRICE,
                    "Relationship Between Product Price and Rating",
                    "Actual price",
                )?,
                discount_vs_rating: ScatterSeries::against_rating(
                    table,
                    DISCOUNT,
                    "Discount Percentage vs Rating",
                    "Discount %",
                )?,
                discounted_price_vs_rating: ScatterSeries::against_rating(
                    table,
                    DISCOUNTED_PRICE,
                    "Discounted Price vs Rating",
                    "Discounted price",
                )?,
            },
        };

        Ok(view)
    }

    pub fn section(&self) -> Section {
        match self {
            SectionView::Categories { .. } => Section::Categories,
            SectionView::Products { .. } => Section::Products,
            SectionView::AboutData { .. } => Section::AboutData,
        }
    }

    /// Ranking tables in display order. Empty for About Data.
    pub fn tables(&self) -> Vec<&DerivedTable> {
        match self {
            SectionView::Categories {
                by_total_rating,
                by_average_discount,
            } => vec![by_total_rating, by_average_discount],
            SectionView::Products { most_reviewed } => vec![most_reviewed],
            SectionView::AboutData { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProductRecord;

    fn sample() -> ProductTable {
        ProductTable::from_records(&[
            ProductRecord::new("Electronics", "Cable")
                .with_rating(4.0)
                .with_discount(Some(60.0))
                .with_prices(499.0, 199.0)
                .with_rating_count(24269.0),
            ProductRecord::new("Electronics", "Charger")
                .with_rating(4.5)
                .with_discount(Some(40.0))
                .with_prices(999.0, 599.0)
                .with_rating_count(800.0),
            ProductRecord::new("Books", "Novel")
                .with_rating(3.9)
                .with_discount(Some(10.0))
                .with_prices(300.0, 270.0)
                .with_rating_count(1500.0),
        ])
        .unwrap()
    }

    #[test]
    fn categories_section_has_two_rankings() {
        let view =
            SectionView::compute(&sample(), Section::Categories, SectionParams::default()).unwrap();

        assert_eq!(view.section(), Section::Categories);
        let tables = view.tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].keys(), vec!["Electronics", "Books"]);
        assert_eq!(tables[1].values(), vec![50.0, 10.0]);
    }

    #[test]
    fn sliders_are_independent() {
        let params = SectionParams {
            rating_top_n: TopN::try_new(1).unwrap(),
            ..Default::default()
        };
        let view = SectionView::compute(&sample(), Section::Categories, params).unwrap();

        let tables = view.tables();
        assert_eq!(tables[0].len(), 1);
        assert_eq!(tables[1].len(), 2);
    }

    #[test]
    fn products_section_ranks_reviews() {
        let view =
            SectionView::compute(&sample(), Section::Products, SectionParams::default()).unwrap();

        assert_eq!(view.tables()[0].keys(), vec!["Cable", "Novel", "Charger"]);
    }

    #[test]
    fn about_data_section_has_three_series() {
        let view =
            SectionView::compute(&sample(), Section::AboutData, SectionParams::default()).unwrap();

        let SectionView::AboutData {
            summary,
            price_vs_rating,
            discount_vs_rating,
            discounted_price_vs_rating,
        } = view
        else {
            panic!("expected About Data view");
        };
        assert_eq!(
            summary,
            DatasetSummary {
                products: 3,
                categories: 2
            }
        );
        for series in [price_vs_rating, discount_vs_rating, discounted_price_vs_rating] {
            assert_eq!(series.point_count, 3);
            assert!(series.correlation.is_some());
        }
    }

    #[test]
    fn serializes_with_section_tag() {
        let view =
            SectionView::compute(&sample(), Section::Products, SectionParams::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["section"], "products");
        assert_eq!(json["most_reviewed"]["entries"][0]["key"], "Cable");
    }
}
