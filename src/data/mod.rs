//! Data module - CSV loading and the shared product table

mod loader;
mod table;

pub use loader::{load_shared, DataLoader, LoaderError};
pub use table::{ProductRecord, ProductTable};

/// Canonical column names used inside [`ProductTable`].
pub mod columns {
    pub const CATEGORY: &str = "main_category";
    pub const PRODUCT_NAME: &str = "product_name";
    pub const RATING: &str = "rating";
    pub const DISCOUNT: &str = "discount_percentage";
    pub const ACTUAL_PRICE: &str = "actual_price";
    pub const DISCOUNTED_PRICE: &str = "discounted_price";
    pub const RATING_COUNT: &str = "rating_count";
}
