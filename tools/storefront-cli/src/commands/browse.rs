//! Interactive catalog browsing.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use storefront_catalog::catalog::ALL_CATEGORIES;
use storefront_catalog::prelude::*;
use storefront_catalog::search::advisor::LAPTOP_COMPANIES;
use tracing::debug;

use super::list::print_view;
use super::BrowseArgs;
use crate::context::Context;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Category,
    PriceRange,
    Brands,
    Tags,
    Colors,
    InStock,
    OnSale,
    Search,
    Sort,
    RemoveFilter,
    ResetAll,
    Quit,
}

impl Action {
    const ALL: [Action; 12] = [
        Action::Category,
        Action::PriceRange,
        Action::Brands,
        Action::Tags,
        Action::Colors,
        Action::InStock,
        Action::OnSale,
        Action::Search,
        Action::Sort,
        Action::RemoveFilter,
        Action::ResetAll,
        Action::Quit,
    ];

    fn label(&self, state: &FilterState) -> String {
        match self {
            Action::Category => format!("Category ({})", state.category),
            Action::PriceRange => format!(
                "Price range ({} - {})",
                state.price_range.min.display_compact(),
                state.price_range.max.display_compact()
            ),
            Action::Brands => format!("Brands ({} selected)", state.brands.len()),
            Action::Tags => format!("Tags ({} selected)", state.tags.len()),
            Action::Colors => format!("Colors ({} selected)", state.colors.len()),
            Action::InStock => format!("In stock only [{}]", on_off(state.in_stock_only)),
            Action::OnSale => format!("On sale only [{}]", on_off(state.discounted_only)),
            Action::Search => {
                if state.search.is_empty() {
                    "Search".to_string()
                } else {
                    format!("Search (\"{}\")", state.search)
                }
            }
            Action::Sort => format!("Sort ({})", state.sort.display_name()),
            Action::RemoveFilter => "Remove a filter".to_string(),
            Action::ResetAll => "Reset all".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and cannot produce JSON output");
    }

    let catalog = ctx.load_catalog()?;
    let mut controller = FilterController::new(&catalog);
    args.filters.apply(&mut controller, ctx.config.catalog.default_sort)?;
    handle_events(&mut controller, ctx)?;

    loop {
        ctx.output.clear();
        let view = controller.view();
        print_view(
            &ctx.output,
            &view,
            Some(args.limit),
            ctx.config.display.show_effective_price,
        );
        println!();

        let labels: Vec<String> = Action::ALL
            .iter()
            .map(|a| a.label(controller.state()))
            .collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Category => choose_category(&mut controller)?,
            Action::PriceRange => choose_price_range(&mut controller)?,
            Action::Brands => {
                let options = catalog.brands();
                let selected = controller.state().brands.clone();
                for brand in choose_many("Brands", &options, &selected)? {
                    controller.toggle_brand(&brand);
                }
            }
            Action::Tags => {
                let options = catalog.tags();
                let selected = controller.state().tags.clone();
                for tag in choose_many("Tags", &options, &selected)? {
                    controller.toggle_tag(&tag);
                }
            }
            Action::Colors => {
                let options = catalog.colors();
                let selected = controller.state().colors.clone();
                for color in choose_many("Colors", &options, &selected)? {
                    controller.toggle_color(&color);
                }
            }
            Action::InStock => {
                let value = !controller.state().in_stock_only;
                controller.set_in_stock_only(value);
            }
            Action::OnSale => {
                let value = !controller.state().discounted_only;
                controller.set_discounted_only(value);
            }
            Action::Search => {
                let query: String = Input::new()
                    .with_prompt("Search (empty to clear)")
                    .with_initial_text(controller.state().search.clone())
                    .allow_empty(true)
                    .interact_text()?;
                controller.set_search_query(query);
            }
            Action::Sort => {
                let names: Vec<&str> = SortOption::ALL.iter().map(|s| s.display_name()).collect();
                let current = SortOption::ALL
                    .iter()
                    .position(|s| *s == controller.state().sort)
                    .unwrap_or(0);
                let choice = Select::new()
                    .with_prompt("Sort by")
                    .items(&names)
                    .default(current)
                    .interact()?;
                controller.set_sort(SortOption::ALL[choice]);
            }
            Action::RemoveFilter => remove_filter(&mut controller, ctx)?,
            Action::ResetAll => controller.reset_all(),
            Action::Quit => break,
        }

        handle_events(&mut controller, ctx)?;
    }

    Ok(())
}

fn choose_category(controller: &mut FilterController<'_>) -> Result<()> {
    let mut items = vec![ALL_CATEGORIES.to_string()];
    items.extend(controller.catalog().categories().iter().cloned());
    let current = items
        .iter()
        .position(|c| c.as_str() == controller.state().category.as_str())
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Category")
        .items(&items)
        .default(current)
        .interact()?;
    controller.set_category(CategorySelection::named(items[choice].clone()));
    Ok(())
}

fn choose_price_range(controller: &mut FilterController<'_>) -> Result<()> {
    let currency = controller.catalog().currency();
    let range = controller.state().price_range;

    let min: f64 = Input::new()
        .with_prompt(format!("Min price ({})", currency.symbol()))
        .default(range.min.to_decimal())
        .validate_with(non_negative)
        .interact_text()?;
    let max: f64 = Input::new()
        .with_prompt(format!("Max price ({})", currency.symbol()))
        .default(range.max.to_decimal())
        .validate_with(non_negative)
        .interact_text()?;

    controller.set_price_range(PriceRange::new(
        Money::from_decimal(min, currency),
        Money::from_decimal(max, currency),
    ));
    Ok(())
}

fn non_negative(value: &f64) -> Result<(), &'static str> {
    if value.is_finite() && *value >= 0.0 {
        Ok(())
    } else {
        Err("price must be a non-negative number")
    }
}

/// Ask for a set of values and return the ones whose selection changed.
fn choose_many(prompt: &str, options: &[&str], selected: &[String]) -> Result<Vec<String>> {
    if options.is_empty() {
        return Ok(Vec::new());
    }
    let defaults: Vec<bool> = options
        .iter()
        .map(|o| selected.iter().any(|s| s == o))
        .collect();
    let chosen = MultiSelect::new()
        .with_prompt(format!("{} (space to toggle, enter to confirm)", prompt))
        .items(options)
        .defaults(&defaults)
        .interact()?;
    Ok(changed(options, &defaults, &chosen))
}

fn changed(options: &[&str], before: &[bool], chosen: &[usize]) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .filter(|(i, _)| before[*i] != chosen.contains(i))
        .map(|(_, o)| o.to_string())
        .collect()
}

fn remove_filter(controller: &mut FilterController<'_>, ctx: &Context) -> Result<()> {
    let active = controller.state().active_filters();
    if active.is_empty() {
        ctx.output.info("No active filters");
        return Ok(());
    }

    let labels: Vec<String> = active.iter().map(|f| f.label()).collect();
    let choice = Select::new()
        .with_prompt("Remove which filter?")
        .items(&labels)
        .default(0)
        .interact()?;
    controller.remove_filter(&active[choice]);
    Ok(())
}

/// React to controller events; a switch to Computers offers the laptop
/// advisor.
fn handle_events(controller: &mut FilterController<'_>, ctx: &Context) -> Result<()> {
    for event in controller.drain_events() {
        debug!(?event, "catalog event");
        match event {
            CatalogEvent::CategoryChanged {
                prompt_laptop_advisor: true,
                ..
            } => laptop_advisor(controller, ctx)?,
            CatalogEvent::FiltersReset => ctx.output.success("All filters reset"),
            _ => {}
        }
    }
    // Events raised by the advisor itself need no further handling.
    for event in controller.drain_events() {
        debug!(?event, "catalog event");
    }
    Ok(())
}

fn laptop_advisor(controller: &mut FilterController<'_>, ctx: &Context) -> Result<()> {
    let wanted = Confirm::new()
        .with_prompt("Looking for a laptop? Answer two questions to narrow the list")
        .default(true)
        .interact()?;
    if !wanted {
        return Ok(());
    }

    let budget: String = Input::new()
        .with_prompt("Budget (empty for any)")
        .allow_empty(true)
        .interact_text()?;
    let company = Select::new()
        .with_prompt("Preferred company")
        .items(LAPTOP_COMPANIES)
        .default(0)
        .interact()?;

    let preferences = LaptopPreferences::parse(
        &budget,
        LAPTOP_COMPANIES[company],
        controller.catalog().currency(),
    );
    if preferences.is_empty() {
        ctx.output.info("No preferences given, showing all laptops");
    }
    controller.apply_laptop_preferences(preferences);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_reports_only_flips() {
        let options = ["Apple", "Dell", "HP"];
        let before = [true, false, false];
        // Apple stays, Dell added.
        assert_eq!(changed(&options, &before, &[0, 1]), vec!["Dell".to_string()]);
        // Apple removed.
        assert_eq!(changed(&options, &before, &[]), vec!["Apple".to_string()]);
    }

    #[test]
    fn test_labels_reflect_state() {
        let state = FilterState {
            category: CategorySelection::named("Audio"),
            in_stock_only: true,
            search: "hub".to_string(),
            ..FilterState::default()
        };
        assert_eq!(Action::Category.label(&state), "Category (Audio)");
        assert_eq!(Action::InStock.label(&state), "In stock only [on]");
        assert_eq!(Action::OnSale.label(&state), "On sale only [off]");
        assert_eq!(Action::Search.label(&state), "Search (\"hub\")");
        assert_eq!(Action::PriceRange.label(&state), "Price range ($0 - $1500)");
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative(&0.0).is_ok());
        assert!(non_negative(&-1.0).is_err());
        assert!(non_negative(&f64::NAN).is_err());
    }
}
