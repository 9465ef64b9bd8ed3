//! Product listing command.

use anyhow::Result;
use storefront_catalog::prelude::*;
use storefront_catalog::search::NO_RESULTS_MESSAGE;

use super::ListArgs;
use crate::context::Context;
use crate::output::{chips_line, price_cell, rating_cell, stock_badge, Output};

const WIDTHS: [usize; 7] = [4, 28, 11, 12, 30, 11, 12];

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut controller = FilterController::new(&catalog);
    args.filters.apply(&mut controller, ctx.config.catalog.default_sort)?;

    if args.budget.is_some() || args.company.is_some() {
        let preferences = LaptopPreferences::parse(
            args.budget.as_deref().unwrap_or(""),
            args.company.as_deref().unwrap_or(""),
            catalog.currency(),
        );
        ctx.output.debug(&format!("Laptop preferences: {:?}", preferences));
        controller.apply_laptop_preferences(preferences);
    }

    let view = controller.view();

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let limit = args.limit.or(ctx.config.display.limit);
    print_view(
        &ctx.output,
        &view,
        limit,
        ctx.config.display.show_effective_price,
    );

    Ok(())
}

/// Print the summary, chips and product table for a view.
pub fn print_view(output: &Output, view: &CatalogView<'_>, limit: Option<usize>, show_effective: bool) {
    output.header(&format!("{} (sorted by {})", view.summary(), view.sort.display_name()));

    if view.has_active_filters() {
        output.info(&format!("Active filters: {}", chips_line(&view.active_filters)));
    }

    if view.is_empty() {
        output.warn(NO_RESULTS_MESSAGE);
        return;
    }

    output.table_row(
        &["ID", "NAME", "BRAND", "CATEGORY", "PRICE", "RATING", "STOCK"],
        &WIDTHS,
    );

    let shown = limit.unwrap_or(view.count()).min(view.count());
    for product in view.products.iter().take(shown) {
        let id = product.id.to_string();
        let price = price_cell(product, show_effective);
        let rating = rating_cell(product.rating);
        let stock = stock_badge(product.in_stock);
        output.table_row(
            &[
                &id,
                &truncate(&product.name, WIDTHS[1]),
                &product.brand,
                &product.category,
                &price,
                &rating,
                &stock,
            ],
            &WIDTHS,
        );
    }

    if shown < view.count() {
        output.info(&format!("... and {} more", view.count() - shown));
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
