//! Catalog-wide properties of the filter/sort engine and controller.

use std::collections::HashSet;

use storefront_catalog::prelude::*;
use storefront_catalog::search::engine;

fn seed() -> Catalog {
    Catalog::seed().expect("seed catalog is valid")
}

/// A spread of filter states covering every dimension.
fn sample_states(catalog: &Catalog) -> Vec<FilterState> {
    let mut categories = vec![CategorySelection::All];
    categories.extend(catalog.categories().iter().map(|c| CategorySelection::named(c.as_str())));

    let ranges = [
        PriceRange::default(),
        PriceRange::whole(0, 150, Currency::USD),
        PriceRange::whole(100, 300, Currency::USD),
        PriceRange::whole(900, 1500, Currency::USD),
    ];
    let brands: Vec<String> = catalog.brands().iter().map(|b| b.to_string()).collect();
    let tags: Vec<String> = catalog.tags().iter().map(|t| t.to_string()).collect();
    let colors: Vec<String> = catalog.colors().iter().map(|c| c.to_string()).collect();
    let searches = ["", "laptop", "SOUND", "zzz"];

    let mut states = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        for (j, range) in ranges.iter().enumerate() {
            for (k, search) in searches.iter().enumerate() {
                let n = i + j + k;
                states.push(FilterState {
                    category: category.clone(),
                    price_range: *range,
                    brands: brands.iter().skip(n % 3).step_by(3).cloned().collect(),
                    tags: if n % 2 == 0 { vec![tags[n % tags.len()].clone()] } else { Vec::new() },
                    colors: if n % 4 == 0 { vec![colors[n % colors.len()].clone()] } else { Vec::new() },
                    in_stock_only: n % 3 == 0,
                    discounted_only: n % 5 == 0,
                    search: search.to_string(),
                    sort: SortOption::ALL[n % SortOption::ALL.len()],
                });
            }
        }
    }
    states
}

#[test]
fn results_are_a_subset_without_duplicates() {
    let catalog = seed();
    let catalog_ids: HashSet<ProductId> = catalog.products().iter().map(|p| p.id).collect();

    for state in sample_states(&catalog) {
        let result = engine::apply(catalog.products(), &state);
        let ids: HashSet<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), result.len(), "duplicate product for {:?}", state);
        assert!(ids.is_subset(&catalog_ids));
        assert!(result.iter().all(|p| state.matches(p)));
    }
}

#[test]
fn every_result_respects_the_price_range() {
    let catalog = seed();
    for state in sample_states(&catalog) {
        for product in engine::apply(catalog.products(), &state) {
            assert!(product.price.amount_cents >= state.price_range.min.amount_cents);
            assert!(product.price.amount_cents <= state.price_range.max.amount_cents);
        }
    }
}

#[test]
fn reset_all_returns_full_catalog_in_default_order() {
    let catalog = seed();
    let mut controller = FilterController::new(&catalog);
    controller.set_category("Audio");
    controller.toggle_color("black");
    controller.set_discounted_only(true);
    controller.set_sort(SortOption::Newest);
    controller.reset_all();

    let view = controller.view();
    assert_eq!(view.count(), catalog.len());
    assert!(!view.has_active_filters());
    let prices: Vec<i64> = view.products.iter().map(|p| p.price.amount_cents).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
}

#[test]
fn toggling_a_brand_twice_is_a_no_op() {
    let catalog = seed();
    for brand in catalog.brands() {
        let mut controller = FilterController::new(&catalog);
        controller.set_category("Audio");
        let before: Vec<ProductId> = controller.results().iter().map(|p| p.id).collect();

        controller.toggle_brand(brand);
        controller.toggle_brand(brand);
        let after: Vec<ProductId> = controller.results().iter().map(|p| p.id).collect();
        assert_eq!(before, after, "brand {}", brand);
    }
}

#[test]
fn price_desc_is_price_asc_reversed_for_distinct_prices() {
    let catalog = seed();
    let asc_state = FilterState::default();
    let desc_state = FilterState {
        sort: SortOption::PriceDesc,
        ..FilterState::default()
    };

    let mut asc: Vec<ProductId> = engine::apply(catalog.products(), &asc_state)
        .iter()
        .map(|p| p.id)
        .collect();
    let desc: Vec<ProductId> = engine::apply(catalog.products(), &desc_state)
        .iter()
        .map(|p| p.id)
        .collect();
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn computers_category_holds_only_computers() {
    let catalog = seed();
    let mut controller = FilterController::new(&catalog);
    controller.set_category("Computers");
    let view = controller.view();
    assert!(!view.is_empty());
    assert!(view.products.iter().all(|p| p.category == "Computers"));
}

#[test]
fn search_is_literal() {
    let catalog = seed();
    let mut controller = FilterController::new(&catalog);
    controller.set_search_query(".*");
    assert!(controller.view().is_empty());

    controller.set_search_query("smart ");
    let names: Vec<&str> = controller.results().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Smart Home Hub"]);

    controller.set_search_query("   ");
    assert!(controller.view().is_empty());
}

#[test]
fn rating_sort_is_non_increasing() {
    let catalog = seed();
    for mut state in sample_states(&catalog) {
        state.sort = SortOption::Rating;
        let result = engine::apply(catalog.products(), &state);
        assert!(
            result.windows(2).all(|w| w[0].rating >= w[1].rating),
            "rating order broken for {:?}",
            state
        );
    }
}

#[test]
fn removing_a_chip_removes_exactly_that_chip() {
    let catalog = seed();
    for state in sample_states(&catalog) {
        let chips = state.active_filters();
        for (i, chip) in chips.iter().enumerate() {
            let mut controller = FilterController::with_state(&catalog, state.clone());
            controller.remove_filter(chip);

            let mut expected = chips.clone();
            expected.remove(i);
            assert_eq!(controller.state().active_filters(), expected, "removing {:?}", chip);
        }
    }
}
