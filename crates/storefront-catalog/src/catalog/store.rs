//! The in-memory catalog store.

use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::catalog::category::{ALL_CATEGORIES, KNOWN_CATEGORIES};
use crate::catalog::CategorySelection;
use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Built-in demo catalog.
const SEED_JSON: &str = include_str!("../../data/products.json");

/// A read-only collection of products plus the category menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: Currency,
    categories: Vec<String>,
    products: Vec<Product>,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    products: Vec<ProductRecord>,
}

/// A product as written in catalog files: decimal price, camelCase keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    brand: String,
    category: String,
    #[serde(default)]
    image: String,
    price: f64,
    #[serde(default)]
    discount: u32,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default = "default_in_stock")]
    in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Result<Product, CatalogError> {
        if self.price < 0.0 || self.price.is_nan() {
            return Err(CatalogError::NegativePrice(self.id));
        }
        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            brand: self.brand,
            category: self.category,
            image: self.image,
            price: Money::from_decimal(self.price, currency),
            discount: self.discount,
            rating: self.rating,
            tags: self.tags,
            colors: self.colors,
            in_stock: self.in_stock,
        })
    }
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// When `categories` is empty the known storefront categories are used.
    /// Product categories missing from the menu are appended in first-seen
    /// order.
    pub fn new(
        products: Vec<Product>,
        categories: Vec<String>,
        currency: Currency,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            validate(product)?;
            if !seen.insert(product.id) {
                warn!(id = %product.id, "duplicate product id in catalog");
                return Err(CatalogError::DuplicateProductId(product.id.get()));
            }
        }

        let mut categories = if categories.is_empty() {
            KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            categories
        };
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog built"
        );

        Ok(Self {
            currency,
            categories,
            products,
        })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let currency = match file.currency.as_deref() {
            Some(code) => Currency::from_code(code)?,
            None => Currency::default(),
        };
        let products = file
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products, file.categories, currency)
    }

    /// The built-in demo catalog.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category menu, without the "All" entry.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Resolve a user-supplied category name, ignoring case.
    ///
    /// "All" (any case) or an empty name selects every category.
    pub fn category(&self, name: &str) -> Result<CategorySelection, CatalogError> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Ok(CategorySelection::All);
        }
        self.categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name))
            .map(|c| CategorySelection::named(c.as_str()))
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_string()))
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        unique(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        unique(
            self.products
                .iter()
                .flat_map(|p| p.tags.iter().map(String::as_str)),
        )
    }

    /// Distinct colors in first-seen order.
    pub fn colors(&self) -> Vec<&str> {
        unique(
            self.products
                .iter()
                .flat_map(|p| p.colors.iter().map(String::as_str)),
        )
    }
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    if product.discount > 100 {
        return Err(CatalogError::InvalidDiscount {
            product_id: product.id.get(),
            discount: product.discount,
        });
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidRating {
            product_id: product.id.get(),
            rating: product.rating,
        });
    }
    if product.price.is_negative() {
        return Err(CatalogError::NegativePrice(product.id.get()));
    }
    Ok(())
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
