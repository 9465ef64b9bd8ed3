//! Search module.
//!
//! Contains the filter state, the filter/sort engine, the controller that
//! mutates the state and the derived view handed to presentation.

pub mod advisor;
mod controller;
pub mod engine;
mod events;
mod filter;
mod sort;
mod view;

pub use advisor::LaptopPreferences;
pub use controller::FilterController;
pub use events::CatalogEvent;
pub use filter::{Filter, FilterState, PriceRange, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
pub use sort::SortOption;
pub use view::{ActiveFilter, CatalogView, Facet, FacetValue, Facets, NO_RESULTS_MESSAGE};
