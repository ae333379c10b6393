//! Stats module - ranking queries and correlation series over the product table

mod correlation;
mod ranking;
mod top_n;

pub use correlation::{CorrelationStrength, ScatterSeries};
pub use ranking::{DerivedTable, RankedEntry, Ranking, RankingError};
pub use top_n::{ParameterError, TopN};
