//! Correlation Series Module
//! Point series for the "About Data" scatter plots, each summarized by a
//! Pearson correlation coefficient.

use crate::data::columns::RATING;
use crate::data::ProductTable;
use serde::Serialize;
use statrs::statistics::Statistics;

use super::RankingError;

/// Qualitative reading of |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Negligible,
    Weak,
    Moderate,
    Strong,
}

impl CorrelationStrength {
    pub fn from_coefficient(r: f64) -> Self {
        match r.abs() {
            a if a < 0.1 => Self::Negligible,
            a if a < 0.3 => Self::Weak,
            a if a < 0.5 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Negligible => "no clear correlation",
            Self::Weak => "a weak correlation",
            Self::Moderate => "a moderate correlation",
            Self::Strong => "a strong correlation",
        }
    }
}

/// (x, rating) points for one measure, plus their correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    #[serde(skip)]
    pub points: Vec<[f64; 2]>,
    pub point_count: usize,
    pub correlation: Option<f64>,
    pub strength: Option<CorrelationStrength>,
}

impl ScatterSeries {
    /// Pair `x_column` with rating, skipping rows where either is null.
    pub fn against_rating(
        table: &ProductTable,
        x_column: &str,
        title: &str,
        x_label: &'static str,
    ) -> Result<Self, RankingError> {
        let df = table.frame();
        let xs = df.column(x_column)?.f64()?;
        let ys = df.column(RATING)?.f64()?;

        let points: Vec<[f64; 2]> = xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| Some([x?, y?]))
            .collect();

        let correlation = Self::pearson(&points);
        Ok(Self {
            title: title.to_string(),
            x_label,
            y_label: "Rating",
            point_count: points.len(),
            strength: correlation.map(CorrelationStrength::from_coefficient),
            correlation,
            points,
        })
    }

    /// Pearson's r, or `None` with fewer than two points or a constant axis.
    pub fn pearson(points: &[[f64; 2]]) -> Option<f64> {
        if points.len() < 2 {
            return None;
        }
        let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
        let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();

        let sx = xs.iter().std_dev();
        let sy = ys.iter().std_dev();
        if sx == 0.0 || sy == 0.0 || !sx.is_finite() || !sy.is_finite() {
            return None;
        }

        let r = xs.iter().covariance(ys.iter()) / (sx * sy);
        Some(r.clamp(-1.0, 1.0))
    }

    /// One-sentence reading shown under the chart.
    pub fn insight(&self) -> String {
        match (self.correlation, self.strength) {
            (Some(r), Some(strength)) => format!(
                "{} and rating show {} (r = {:.2}).",
                self.x_label,
                strength.describe(),
                r
            ),
            _ => format!("Not enough data to relate {} to rating.", self.x_label),
        }
    }
}
