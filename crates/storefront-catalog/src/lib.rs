//! Product catalog and filter/sort engine for the storefront.
//!
//! This crate provides the in-memory side of the catalog page:
//!
//! - **Catalog**: product records, categories, the built-in seed catalog
//! - **Search**: filter state, the filter/sort engine, the controller that
//!   drives it, and the derived view (results, active-filter chips, facets)
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::prelude::*;
//!
//! let catalog = Catalog::seed()?;
//! let mut controller = FilterController::new(&catalog);
//!
//! controller.set_category("Audio");
//! controller.toggle_tag("bestseller");
//! controller.set_sort(SortOption::Rating);
//!
//! let view = controller.view();
//! for product in &view.products {
//!     println!("{} - {}", product.name, product.effective_price());
//! }
//! println!("{}", view.summary());
//! # Ok::<(), storefront_catalog::CatalogError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategorySelection, Product};

    // Search
    pub use crate::search::{
        ActiveFilter, CatalogEvent, CatalogView, Facet, FacetValue, Facets, FilterController,
        FilterState, LaptopPreferences, PriceRange, SortOption,
    };
}
