//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::prelude::SortOption;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: &[&str] = &["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source and defaults.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing presentation.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source and defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in seed catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Sort applied when no `--sort` flag is given.
    #[serde(default)]
    pub default_sort: SortOption,
}

/// Listing presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum rows printed by `list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Show the discounted price next to the list price.
    #[serde(default = "default_true")]
    pub show_effective_price: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: None,
            show_effective_price: true,
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront CLI configuration

[catalog]
# path = "catalog.json"
default_sort = "price-asc"

[display]
# limit = 20
show_effective_price = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
[catalog]
path = "data/catalog.json"
default_sort = "rating"

[display]
limit = 5
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("data/catalog.json"));
        assert_eq!(config.catalog.default_sort, SortOption::Rating);
        assert_eq!(config.display.limit, Some(5));
        assert!(config.display.show_effective_price);
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let result: Result<StorefrontConfig, _> = toml::from_str(
            r#"
[catalog]
default_sort = "cheapest"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_config() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"display": {"show_effective_price": false}}"#).unwrap();
        assert!(!config.display.show_effective_price);
        assert_eq!(config.catalog.default_sort, SortOption::PriceAsc);
    }
}
