//! Filter state controller.
//!
//! Owns the session's [`FilterState`] and exposes the operations the
//! catalog page binds to its controls. Every operation is an infallible
//! state transition; the derived product list is recomputed lazily by
//! [`FilterController::view`] and memoized on the state hash.

use tracing::trace;

use crate::catalog::{Catalog, CategorySelection, Product};
use crate::search::advisor::{self, LaptopPreferences};
use crate::search::{engine, ActiveFilter, CatalogEvent, CatalogView, FilterState, PriceRange, SortOption};

/// Memoized engine output for one filter state.
#[derive(Debug)]
struct CachedResult<'a> {
    key: u64,
    products: Vec<&'a Product>,
}

/// Holds the current selections for one catalog session.
#[derive(Debug)]
pub struct FilterController<'a> {
    catalog: &'a Catalog,
    state: FilterState,
    cache: Option<CachedResult<'a>>,
    events: Vec<CatalogEvent>,
    recomputations: usize,
}

impl<'a> FilterController<'a> {
    /// Start a session with every filter at its default.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_state(catalog, FilterState::for_currency(catalog.currency()))
    }

    /// Start a session from an existing state (e.g. parsed from a URL).
    pub fn with_state(catalog: &'a Catalog, state: FilterState) -> Self {
        Self {
            catalog,
            state,
            cache: None,
            events: Vec::new(),
            recomputations: 0,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_category(&mut self, category: impl Into<CategorySelection>) {
        let category = category.into();
        if self.state.category == category {
            return;
        }
        trace!(category = %category, "set category");
        self.events.push(CatalogEvent::CategoryChanged {
            prompt_laptop_advisor: advisor::should_prompt(&category),
            category: category.clone(),
        });
        self.state.category = category;
    }

    /// Store the range as given; an inverted range simply matches nothing.
    pub fn set_price_range(&mut self, range: PriceRange) {
        trace!(min = range.min.amount_cents, max = range.max.amount_cents, "set price range");
        self.state.price_range = range;
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.state.brands, brand);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.state.tags, tag);
    }

    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.state.colors, color);
    }

    pub fn set_in_stock_only(&mut self, value: bool) {
        self.state.in_stock_only = value;
    }

    pub fn set_discounted_only(&mut self, value: bool) {
        self.state.discounted_only = value;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search = query.into();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.state.sort = sort;
    }

    /// Restore every field, including the sort, to its default.
    pub fn reset_all(&mut self) {
        trace!("reset all filters");
        let had_category = !self.state.category.is_all();
        self.state = FilterState::for_currency(self.catalog.currency());
        if had_category {
            self.events.push(CatalogEvent::CategoryChanged {
                category: CategorySelection::All,
                prompt_laptop_advisor: false,
            });
        }
        self.events.push(CatalogEvent::FiltersReset);
    }

    /// Clear the field behind one active-filter chip.
    pub fn remove_filter(&mut self, filter: &ActiveFilter) {
        match filter {
            ActiveFilter::Category(_) => self.set_category(CategorySelection::All),
            ActiveFilter::Price(_) => {
                self.set_price_range(PriceRange::default_for(self.catalog.currency()))
            }
            ActiveFilter::Brand(b) => remove(&mut self.state.brands, b),
            ActiveFilter::Tag(t) => remove(&mut self.state.tags, t),
            ActiveFilter::Color(c) => remove(&mut self.state.colors, c),
            ActiveFilter::InStock => self.set_in_stock_only(false),
            ActiveFilter::Discounted => self.set_discounted_only(false),
            ActiveFilter::Search(_) => self.set_search_query(""),
        }
    }

    /// Apply laptop advisor answers on top of the current filters.
    pub fn apply_laptop_preferences(&mut self, preferences: LaptopPreferences) {
        let previous = self.state.category.clone();
        preferences.apply_to(&mut self.state);
        if self.state.category != previous {
            self.events.push(CatalogEvent::CategoryChanged {
                category: self.state.category.clone(),
                prompt_laptop_advisor: false,
            });
        }
        self.events.push(CatalogEvent::LaptopPreferencesApplied(preferences));
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<CatalogEvent> {
        std::mem::take(&mut self.events)
    }

    /// Filtered and sorted products for the current state.
    ///
    /// Recomputed only when the state hash differs from the cached one.
    pub fn results(&mut self) -> &[&'a Product] {
        let key = self.state.cache_key();
        let stale = self.cache.as_ref().map_or(true, |c| c.key != key);
        if stale {
            self.recomputations += 1;
            let products = engine::apply(self.catalog.products(), &self.state);
            self.cache = Some(CachedResult { key, products });
        }
        match &self.cache {
            Some(cached) => cached.products.as_slice(),
            None => &[],
        }
    }

    /// Build the full view for presentation.
    pub fn view(&mut self) -> CatalogView<'a> {
        let products = self.results().to_vec();
        CatalogView::new(self.catalog, &self.state, products)
    }

    /// How many times the engine has run in this session.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Add `value` when absent, remove it when present.
fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

fn remove(values: &mut Vec<String>, value: &str) {
    values.retain(|v| v != value);
}
