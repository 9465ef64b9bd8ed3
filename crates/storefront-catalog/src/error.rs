//! Catalog error types.

use thiserror::Error;

/// Errors raised at the catalog boundaries (loading data, parsing keys).
///
/// Filtering and sorting never fail; an empty result is a normal outcome.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(u32),

    /// Discount percent outside [0, 100].
    #[error("Invalid discount for product {product_id}: {discount}% (expected 0-100)")]
    InvalidDiscount { product_id: u32, discount: u32 },

    /// Rating outside [0, 5].
    #[error("Invalid rating for product {product_id}: {rating} (expected 0-5)")]
    InvalidRating { product_id: u32, rating: f64 },

    /// Price below zero.
    #[error("Negative price for product {0}")]
    NegativePrice(u32),

    /// Currency code not supported.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Sort key not one of the supported options.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Category is not part of the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
