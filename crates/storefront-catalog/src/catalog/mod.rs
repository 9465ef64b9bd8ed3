//! Product catalog module.
//!
//! Contains product records, category selection, color swatches and the
//! read-only catalog store.

mod category;
pub mod color;
mod product;
mod store;

pub use category::{slugify, CategorySelection, ALL_CATEGORIES, KNOWN_CATEGORIES};
pub use product::Product;
pub use store::Catalog;

#[cfg(test)]
pub(crate) use product::fixtures;
