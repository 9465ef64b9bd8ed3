//! The filter/sort engine.

use tracing::debug;

use crate::catalog::Product;
use crate::search::FilterState;

/// Filter `products` by every active predicate in `state`, then order the
/// survivors by the selected sort.
///
/// The result borrows from `products`, so it is always a subset of the
/// catalog with no duplicates. Ties keep catalog order.
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let predicates = state.predicates();
    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|product| predicates.iter().all(|f| f.matches(product)))
        .collect();
    state.sort.sort(&mut matched);

    debug!(
        total = products.len(),
        matched = matched.len(),
        predicates = predicates.len(),
        sort = state.sort.as_str(),
        "catalog filtered"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;
    use crate::catalog::CategorySelection;
    use crate::money::Currency;
    use crate::search::{PriceRange, SortOption};

    fn prices(result: &[&Product]) -> Vec<i64> {
        result.iter().map(|p| p.price.amount_cents).collect()
    }

    #[test]
    fn test_price_asc_example() {
        let products = vec![
            product(1, "Smartwatch", 199.99),
            product(2, "Speaker", 129.99),
            product(3, "Backpack", 159.99),
            product(4, "Earbuds", 149.99),
        ];
        let state = FilterState::default();
        let result = apply(&products, &state);
        assert_eq!(prices(&result), vec![12999, 14999, 15999, 19999]);
    }

    #[test]
    fn test_category_with_no_products_is_empty() {
        let products = vec![product(1, "Speaker", 129.99)];
        let state = FilterState {
            category: CategorySelection::named("Computers"),
            ..FilterState::default()
        };
        assert!(apply(&products, &state).is_empty());
    }

    #[test]
    fn test_category_only_returns_that_category() {
        let mut laptop = product(1, "Laptop", 999.0);
        laptop.category = "Computers".to_string();
        let products = vec![laptop, product(2, "Speaker", 129.99)];
        let state = FilterState {
            category: CategorySelection::named("Computers"),
            ..FilterState::default()
        };
        let result = apply(&products, &state);
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|p| p.category == "Computers"));
    }

    #[test]
    fn test_discounted_only_example() {
        let mut products: Vec<Product> = (1..=10)
            .map(|i| product(i, &format!("P{}", i), 10.0 * i as f64))
            .collect();
        products[2].discount = 15;
        products[7].discount = 40;

        let state = FilterState {
            discounted_only: true,
            sort: SortOption::Discount,
            ..FilterState::default()
        };
        let result = apply(&products, &state);
        let ids: Vec<u32> = result.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![8, 3]);
    }

    #[test]
    fn test_price_range_bounds_results() {
        let products = vec![
            product(1, "A", 50.0),
            product(2, "B", 100.0),
            product(3, "C", 150.0),
            product(4, "D", 200.01),
        ];
        let state = FilterState {
            price_range: PriceRange::whole(100, 200, Currency::USD),
            ..FilterState::default()
        };
        let ids: Vec<u32> = apply(&products, &state).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_default_range_excludes_above_ceiling() {
        let products = vec![product(1, "Cheap", 10.0), product(2, "Workstation", 2499.0)];
        let result = apply(&products, &FilterState::default());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(apply(&[], &FilterState::default()).is_empty());
    }
}
