//! Amazon Sales Dashboard - core library
//!
//! Loads the cleaned product CSV once per process and answers the ranking
//! queries behind each dashboard section. Rendering lives in the binary.

pub mod config;
pub mod dashboard;
pub mod data;
pub mod nav;
pub mod stats;

pub use config::DashboardConfig;
pub use dashboard::{DatasetSummary, SectionParams, SectionView};
pub use data::{load_shared, DataLoader, LoaderError, ProductRecord, ProductTable};
pub use nav::Section;
pub use stats::{DerivedTable, RankedEntry, Ranking, TopN};
