//! Category selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for "no category constraint" in the UI and on the wire.
pub const ALL_CATEGORIES: &str = "All";

/// Categories the storefront knows about, in menu order.
///
/// A category may be listed even when no product currently belongs to it;
/// selecting it then yields an empty result.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Electronics",
    "Wearables",
    "Photography",
    "Audio",
    "Computers",
    "Gaming",
    "Smart Home",
    "Storage",
];

/// The category part of the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    /// No category constraint.
    #[default]
    All,
    /// Exact match on the product category.
    Named(String),
}

impl CategorySelection {
    /// Select a category by name. `"All"` and the empty string select
    /// everything.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() || name == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(name)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// Check whether a product category satisfies this selection.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for CategorySelection {
    fn from(s: String) -> Self {
        CategorySelection::named(s)
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        CategorySelection::named(s)
    }
}

impl From<CategorySelection> for String {
    fn from(c: CategorySelection) -> Self {
        c.as_str().to_string()
    }
}

/// Turn a category name into a URL-friendly slug ("Smart Home" -> "smart-home").
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
