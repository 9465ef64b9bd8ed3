//! The derived catalog view handed to presentation.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product, ALL_CATEGORIES};
use crate::search::{FilterState, PriceRange, SortOption};

/// Text shown in place of the grid when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No products found.";

/// A removable indicator for a filter-state field that differs from its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ActiveFilter {
    Category(String),
    Price(PriceRange),
    Brand(String),
    Tag(String),
    Color(String),
    InStock,
    Discounted,
    Search(String),
}

impl ActiveFilter {
    /// Text shown on the chip.
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Category(name) => format!("Category: {}", name),
            ActiveFilter::Price(range) => range.label(),
            ActiveFilter::Brand(v) | ActiveFilter::Tag(v) | ActiveFilter::Color(v) => v.clone(),
            ActiveFilter::InStock => "In Stock Only".to_string(),
            ActiveFilter::Discounted => "On Sale".to_string(),
            ActiveFilter::Search(q) => format!("Search: \"{}\"", q),
        }
    }

    /// Field the chip belongs to.
    pub fn key(&self) -> &'static str {
        match self {
            ActiveFilter::Category(_) => "category",
            ActiveFilter::Price(_) => "price",
            ActiveFilter::Brand(_) => "brand",
            ActiveFilter::Tag(_) => "tag",
            ActiveFilter::Color(_) => "color",
            ActiveFilter::InStock => "in_stock",
            ActiveFilter::Discounted => "on_sale",
            ActiveFilter::Search(_) => "q",
        }
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Field this facet filters on.
    pub key: String,
    /// Facet values in menu order.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty terms facet.
    pub fn terms(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    pub fn selected(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter().filter(|v| v.selected)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    pub value: String,
    /// Matching products in the current result.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Facets shown in the filter sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facets {
    pub categories: Facet,
    pub brands: Facet,
    pub tags: Facet,
    pub colors: Facet,
}

impl Facets {
    /// Option lists come from the full catalog; counts come from `results`.
    pub fn build(catalog: &Catalog, state: &FilterState, results: &[&Product]) -> Self {
        let mut categories = Facet::terms("Categories", "category");
        categories.add_value(ALL_CATEGORIES, results.len(), state.category.is_all());
        for name in catalog.categories() {
            let count = results.iter().filter(|p| &p.category == name).count();
            categories.add_value(name.clone(), count, state.category.matches(name) && !state.category.is_all());
        }

        let mut brands = Facet::terms("Brands", "brand");
        for brand in catalog.brands() {
            let count = results.iter().filter(|p| p.brand == brand).count();
            brands.add_value(brand, count, state.brands.iter().any(|b| b == brand));
        }

        let mut tags = Facet::terms("Tags", "tag");
        for tag in catalog.tags() {
            let count = results.iter().filter(|p| p.has_tag(tag)).count();
            tags.add_value(tag, count, state.tags.iter().any(|t| t == tag));
        }

        let mut colors = Facet::terms("Colors", "color");
        for color in catalog.colors() {
            let count = results
                .iter()
                .filter(|p| p.colors.iter().any(|c| c == color))
                .count();
            colors.add_value(color, count, state.colors.iter().any(|c| c == color));
        }

        Self {
            categories,
            brands,
            tags,
            colors,
        }
    }
}

/// Everything presentation needs to render the catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Matching products in display order.
    pub products: Vec<&'a Product>,
    /// Size of the full catalog.
    pub total: usize,
    /// Sort used to order `products`.
    pub sort: SortOption,
    /// Chips for every non-default filter field.
    pub active_filters: Vec<ActiveFilter>,
    /// Sidebar facets.
    pub facets: Facets,
}

impl<'a> CatalogView<'a> {
    /// Assemble a view from already filtered and sorted products.
    pub fn new(catalog: &Catalog, state: &FilterState, products: Vec<&'a Product>) -> Self {
        let facets = Facets::build(catalog, state, &products);
        Self {
            total: catalog.len(),
            sort: state.sort,
            active_filters: state.active_filters(),
            facets,
            products,
        }
    }

    /// Number of matching products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// True when the "no results" state should be rendered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters.is_empty()
    }

    /// Result count line, e.g. "Showing 1 product".
    pub fn summary(&self) -> String {
        if self.count() == 1 {
            "Showing 1 product".to_string()
        } else {
            format!("Showing {} products", self.count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;
    use crate::catalog::CategorySelection;
    use crate::money::Currency;
    use crate::search::engine;

    fn catalog() -> Catalog {
        let mut a = product(1, "Speaker", 129.99);
        a.brand = "SoundCore".to_string();
        a.category = "Audio".to_string();
        a.tags = vec!["bestseller".to_string()];
        a.colors = vec!["black".to_string(), "red".to_string()];
        let mut b = product(2, "Camera", 899.99);
        b.brand = "PixelPro".to_string();
        b.category = "Photography".to_string();
        b.tags = vec!["premium".to_string()];
        b.colors = vec!["black".to_string()];
        Catalog::new(vec![a, b], Vec::new(), Currency::USD).unwrap()
    }

    #[test]
    fn test_summary_pluralization() {
        let catalog = catalog();
        let state = FilterState {
            brands: vec!["PixelPro".to_string()],
            ..FilterState::default()
        };
        let products = engine::apply(catalog.products(), &state);
        let view = CatalogView::new(&catalog, &state, products);
        assert_eq!(view.summary(), "Showing 1 product");
        assert_eq!(view.total, 2);
        assert!(view.has_active_filters());
    }

    #[test]
    fn test_empty_view() {
        let catalog = catalog();
        let state = FilterState {
            category: CategorySelection::named("Computers"),
            ..FilterState::default()
        };
        let products = engine::apply(catalog.products(), &state);
        let view = CatalogView::new(&catalog, &state, products);
        assert!(view.is_empty());
        assert_eq!(view.summary(), "Showing 0 products");
    }

    #[test]
    fn test_facet_counts_follow_results() {
        let catalog = catalog();
        let state = FilterState {
            category: CategorySelection::named("Audio"),
            ..FilterState::default()
        };
        let products = engine::apply(catalog.products(), &state);
        let facets = Facets::build(&catalog, &state, &products);

        let black = facets.colors.values.iter().find(|v| v.value == "black").unwrap();
        assert_eq!(black.count, 1);
        let pixel = facets.brands.values.iter().find(|v| v.value == "PixelPro").unwrap();
        assert_eq!(pixel.count, 0);

        let selected: Vec<&str> = facets.categories.selected().map(|v| v.value.as_str()).collect();
        assert_eq!(selected, vec!["Audio"]);
        assert_eq!(facets.categories.values[0].value, ALL_CATEGORIES);
    }

    #[test]
    fn test_all_category_selected_by_default() {
        let catalog = catalog();
        let state = FilterState::default();
        let products = engine::apply(catalog.products(), &state);
        let facets = Facets::build(&catalog, &state, &products);
        let selected: Vec<&str> = facets.categories.selected().map(|v| v.value.as_str()).collect();
        assert_eq!(selected, vec![ALL_CATEGORIES]);
        assert_eq!(facets.categories.values[0].count, 2);
    }

    #[test]
    fn test_active_filter_keys() {
        assert_eq!(ActiveFilter::InStock.key(), "in_stock");
        assert_eq!(ActiveFilter::Search("x".into()).label(), "Search: \"x\"");
    }
}
