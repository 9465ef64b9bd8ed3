//! Sort options for the catalog listing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CatalogError;

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by list price, low to high.
    #[default]
    PriceAsc,
    /// Sort by list price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by largest discount.
    Discount,
    /// Sort by newest first (highest id).
    Newest,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
        SortOption::Discount,
        SortOption::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Discount => "discount",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Rating: High to Low",
            SortOption::Discount => "Discount: High to Low",
            SortOption::Newest => "Newest First",
        }
    }

    /// Compare two products under this option.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Discount => b.discount.cmp(&a.discount),
            SortOption::Newest => b.id.cmp(&a.id),
        }
    }

    /// Stable sort: equal keys keep their catalog order.
    pub fn sort(&self, products: &mut [&Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    #[test]
    fn test_parse_keys() {
        for opt in SortOption::ALL {
            assert_eq!(opt.as_str().parse::<SortOption>().unwrap(), opt);
        }
        assert!(matches!(
            "relevance".parse::<SortOption>(),
            Err(CatalogError::UnknownSortOption(_))
        ));
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&SortOption::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
    }

    #[test]
    fn test_price_sort_ignores_discount() {
        let mut cheap_list = product(1, "A", 100.0);
        cheap_list.discount = 0;
        let mut pricey_list = product(2, "B", 150.0);
        pricey_list.discount = 50;

        let mut items = vec![&pricey_list, &cheap_list];
        SortOption::PriceAsc.sort(&mut items);
        assert_eq!(items[0].id, cheap_list.id);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let a = product(1, "A", 10.0);
        let b = product(2, "B", 10.0);
        let c = product(3, "C", 10.0);

        let mut items = vec![&a, &b, &c];
        SortOption::Rating.sort(&mut items);
        let ids: Vec<u32> = items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        SortOption::PriceDesc.sort(&mut items);
        let ids: Vec<u32> = items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rating_is_descending() {
        let mut a = product(1, "A", 10.0);
        a.rating = 4.2;
        let mut b = product(2, "B", 10.0);
        b.rating = 4.9;
        let mut c = product(3, "C", 10.0);
        c.rating = 3.5;

        let mut items = vec![&a, &b, &c];
        SortOption::Rating.sort(&mut items);
        let ratings: Vec<f64> = items.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.2, 3.5]);
    }

    #[test]
    fn test_newest_is_descending_id() {
        let a = product(4, "A", 10.0);
        let b = product(9, "B", 10.0);
        let mut items = vec![&a, &b];
        SortOption::Newest.sort(&mut items);
        assert_eq!(items[0].id.get(), 9);
    }
}
