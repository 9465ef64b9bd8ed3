//! Filter state and filter predicates.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::catalog::{CategorySelection, Product};
use crate::money::{Currency, Money};
use crate::search::{ActiveFilter, SortOption};

/// Lower bound of the default price range, in whole currency units.
pub const DEFAULT_PRICE_MIN: i64 = 0;
/// Upper bound of the default price range, in whole currency units.
pub const DEFAULT_PRICE_MAX: i64 = 1500;

/// Closed price interval `[min, max]` on the list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Range from whole currency units (e.g., `0..=1500` dollars).
    pub fn whole(min: i64, max: i64, currency: Currency) -> Self {
        Self::new(
            Money::from_whole(min, currency),
            Money::from_whole(max, currency),
        )
    }

    /// The slider's default range in the given currency.
    pub fn default_for(currency: Currency) -> Self {
        Self::whole(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX, currency)
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, price: &Money) -> bool {
        self.min.amount_cents <= price.amount_cents && price.amount_cents <= self.max.amount_cents
    }

    /// Check whether the bounds equal the default slider bounds.
    pub fn is_default(&self) -> bool {
        self.min.amount_cents == DEFAULT_PRICE_MIN * 100
            && self.max.amount_cents == DEFAULT_PRICE_MAX * 100
    }

    /// Chip label, e.g. "Price: $0 - $500".
    pub fn label(&self) -> String {
        format!(
            "Price: {} - {}",
            self.min.display_compact(),
            self.max.display_compact()
        )
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::default_for(Currency::default())
    }
}

/// Everything the shopper has selected on the catalog page.
///
/// Multi-select dimensions keep selection order so chips render in the
/// order they were picked; an empty list means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub category: CategorySelection,
    pub price_range: PriceRange,
    pub brands: Vec<String>,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock_only: bool,
    pub discounted_only: bool,
    pub search: String,
    pub sort: SortOption,
}

impl FilterState {
    /// Default state with the price range expressed in `currency`.
    pub fn for_currency(currency: Currency) -> Self {
        Self {
            price_range: PriceRange::default_for(currency),
            ..Self::default()
        }
    }

    /// Predicates for the dimensions that currently constrain the result.
    ///
    /// The price predicate is always present since the range is closed.
    pub fn predicates(&self) -> Vec<Filter<'_>> {
        let mut filters = Vec::new();
        if let CategorySelection::Named(name) = &self.category {
            filters.push(Filter::Category(name));
        }
        if !self.search.is_empty() {
            filters.push(Filter::Text(self.search.to_lowercase()));
        }
        filters.push(Filter::PriceRange(self.price_range));
        if !self.brands.is_empty() {
            filters.push(Filter::Brands(&self.brands));
        }
        if !self.tags.is_empty() {
            filters.push(Filter::Tags(&self.tags));
        }
        if !self.colors.is_empty() {
            filters.push(Filter::Colors(&self.colors));
        }
        if self.in_stock_only {
            filters.push(Filter::InStock);
        }
        if self.discounted_only {
            filters.push(Filter::Discounted);
        }
        filters
    }

    /// Check a single product against every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.predicates().iter().all(|f| f.matches(product))
    }

    /// Removable descriptors for every field that differs from its default.
    ///
    /// Order: category, price, brands, tags, colors, in-stock, on-sale,
    /// search. Sort is a preference and never produces a chip.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if let CategorySelection::Named(name) = &self.category {
            active.push(ActiveFilter::Category(name.clone()));
        }
        if !self.price_range.is_default() {
            active.push(ActiveFilter::Price(self.price_range));
        }
        active.extend(self.brands.iter().cloned().map(ActiveFilter::Brand));
        active.extend(self.tags.iter().cloned().map(ActiveFilter::Tag));
        active.extend(self.colors.iter().cloned().map(ActiveFilter::Color));
        if self.in_stock_only {
            active.push(ActiveFilter::InStock);
        }
        if self.discounted_only {
            active.push(ActiveFilter::Discounted);
        }
        if !self.search.is_empty() {
            active.push(ActiveFilter::Search(self.search.clone()));
        }
        active
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }

    /// Hash of the full state, used to key the memoized result list.
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// A single filter predicate over products.
///
/// Multi-select predicates match when the product shares at least one
/// value with the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<'a> {
    /// Exact category match.
    Category(&'a str),
    /// Literal substring in name, description or brand. Stored lowercase.
    Text(String),
    /// List price within the closed range.
    PriceRange(PriceRange),
    /// Brand is one of the selected brands.
    Brands(&'a [String]),
    /// At least one tag in common.
    Tags(&'a [String]),
    /// At least one color in common.
    Colors(&'a [String]),
    /// Only products in stock.
    InStock,
    /// Only products with a discount.
    Discounted,
}

impl Filter<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(name) => product.category == *name,
            Filter::Text(needle) => product.matches_text(needle),
            Filter::PriceRange(range) => range.contains(&product.price),
            Filter::Brands(brands) => brands.contains(&product.brand),
            Filter::Tags(tags) => product.has_any_tag(tags),
            Filter::Colors(colors) => product.has_any_color(colors),
            Filter::InStock => product.in_stock,
            Filter::Discounted => product.is_discounted(),
        }
    }
}
