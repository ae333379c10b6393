//! Charts module - Chart rendering

mod palette;
mod plotter;

pub use palette::{ColorScale, NAVY, SIDEBAR_NAVY};
pub use plotter::ChartPlotter;
