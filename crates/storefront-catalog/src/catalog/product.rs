//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; the filter engine only
/// ever borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Category name (e.g., "Audio").
    pub category: String,
    /// Image path for listings.
    pub image: String,
    /// List price.
    pub price: Money,
    /// Discount percent in [0, 100].
    pub discount: u32,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Labels such as "new", "bestseller", "premium".
    pub tags: Vec<String>,
    /// Available colors.
    pub colors: Vec<String>,
    /// Whether the product can be ordered.
    pub in_stock: bool,
}

impl Product {
    /// Price after applying the discount percentage.
    pub fn effective_price(&self) -> Money {
        self.price.discounted(self.discount)
    }

    /// Check if the product is on sale.
    pub fn is_discounted(&self) -> bool {
        self.discount > 0
    }

    /// Check if the product carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if any of the product's tags is in `tags`.
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }

    /// Check if any of the product's colors is in `colors`.
    pub fn has_any_color(&self, colors: &[String]) -> bool {
        self.colors.iter().any(|c| colors.contains(c))
    }

    /// Literal, case-insensitive substring match on name, description or
    /// brand. `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
    }
}
