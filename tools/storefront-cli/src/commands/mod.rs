//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod facets;
pub mod list;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use storefront_catalog::prelude::*;

/// Filter flags shared by `list` and `facets`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Category to show ("All" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum list price (inclusive).
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum list price (inclusive).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Brand to include (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Tag to include (repeatable).
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Color to include (repeatable).
    #[arg(long)]
    pub color: Vec<String>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Only discounted products.
    #[arg(long)]
    pub on_sale: bool,

    /// Case-insensitive text search over name, description and brand.
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Sort order: price-asc, price-desc, rating, discount, newest.
    #[arg(short, long)]
    pub sort: Option<SortOption>,
}

impl FilterArgs {
    /// Drive `controller` through the operations these flags describe.
    /// `default_sort` applies when no `--sort` flag was given.
    pub fn apply(&self, controller: &mut FilterController<'_>, default_sort: SortOption) -> Result<()> {
        let currency = controller.catalog().currency();

        if let Some(category) = &self.category {
            let selection = controller.catalog().category(category)?;
            controller.set_category(selection);
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let default = PriceRange::default_for(currency);
            let min = price_bound("--min-price", self.min_price, default.min)?;
            let max = price_bound("--max-price", self.max_price, default.max)?;
            controller.set_price_range(PriceRange::new(min, max));
        }

        for brand in &self.brand {
            if !controller.state().brands.contains(brand) {
                controller.toggle_brand(brand);
            }
        }
        for tag in &self.tag {
            if !controller.state().tags.contains(tag) {
                controller.toggle_tag(tag);
            }
        }
        for color in &self.color {
            if !controller.state().colors.contains(color) {
                controller.toggle_color(color);
            }
        }

        controller.set_in_stock_only(self.in_stock);
        controller.set_discounted_only(self.on_sale);
        if let Some(search) = &self.search {
            controller.set_search_query(search.as_str());
        }
        controller.set_sort(self.sort.unwrap_or(default_sort));

        Ok(())
    }
}

fn price_bound(flag: &str, value: Option<f64>, default: Money) -> Result<Money> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(Money::from_decimal(v, default.currency)),
        Some(v) => bail!("{} must be a non-negative number, got {}", flag, v),
    }
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Laptop budget (narrows to Computers up to this price).
    #[arg(long)]
    pub budget: Option<String>,

    /// Laptop company (narrows to Computers from this brand).
    #[arg(long)]
    pub company: Option<String>,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Rows shown after each step.
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(controller: &mut FilterController<'_>) -> Vec<u32> {
        controller.results().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_no_flags_is_default_state() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        FilterArgs::default().apply(&mut controller, SortOption::PriceAsc).unwrap();
        assert_eq!(controller.state(), &FilterState::default());
    }

    #[test]
    fn test_flags_map_onto_state() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        let args = FilterArgs {
            category: Some("Audio".to_string()),
            brand: vec!["SoundCore".to_string(), "SoundCore".to_string()],
            in_stock: true,
            sort: Some(SortOption::PriceDesc),
            ..FilterArgs::default()
        };
        args.apply(&mut controller, SortOption::PriceAsc).unwrap();

        assert_eq!(controller.state().brands, vec!["SoundCore".to_string()]);
        assert_eq!(ids(&mut controller), vec![4, 2]);
    }

    #[test]
    fn test_single_price_bound_keeps_other_default() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        let args = FilterArgs {
            max_price: Some(60.0),
            ..FilterArgs::default()
        };
        args.apply(&mut controller, SortOption::PriceAsc).unwrap();
        assert_eq!(controller.state().price_range.min.amount_cents, 0);
        assert_eq!(ids(&mut controller), vec![13, 11]);
    }

    #[test]
    fn test_default_sort_from_config() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        FilterArgs::default().apply(&mut controller, SortOption::Newest).unwrap();
        assert_eq!(controller.state().sort, SortOption::Newest);
    }

    #[test]
    fn test_rejects_bad_input() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        let args = FilterArgs {
            category: Some("Furniture".to_string()),
            ..FilterArgs::default()
        };
        assert!(args.apply(&mut controller, SortOption::PriceAsc).is_err());

        let args = FilterArgs {
            min_price: Some(-5.0),
            ..FilterArgs::default()
        };
        assert!(args.apply(&mut controller, SortOption::PriceAsc).is_err());
    }
}
