//! Facet counts command.

use anyhow::Result;
use console::style;
use storefront_catalog::prelude::*;

use super::FacetsArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut controller = FilterController::new(&catalog);
    args.filters.apply(&mut controller, ctx.config.catalog.default_sort)?;

    let view = controller.view();

    if ctx.output.is_json() {
        ctx.output.json(&view.facets);
        return Ok(());
    }

    ctx.output.header(&view.summary());
    let range = &controller.state().price_range;
    ctx.output.kv("price", &format!("{} - {}", range.min.display_compact(), range.max.display_compact()));

    for facet in [
        &view.facets.categories,
        &view.facets.brands,
        &view.facets.tags,
        &view.facets.colors,
    ] {
        print_facet(&ctx.output, facet);
    }

    Ok(())
}

fn print_facet(output: &Output, facet: &Facet) {
    output.header(&facet.name);
    for value in &facet.values {
        output.list_item(&facet_line(value));
    }
}

fn facet_line(value: &FacetValue) -> String {
    let line = format!("{} ({})", value.value, value.count);
    if value.selected {
        format!("{} {}", style(line).bold(), style("✓").green())
    } else if value.count == 0 {
        style(line).dim().to_string()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_line_plain() {
        let value = FacetValue {
            value: "Dell".to_string(),
            count: 1,
            selected: false,
        };
        assert_eq!(console::strip_ansi_codes(&facet_line(&value)), "Dell (1)");
    }

    #[test]
    fn test_facet_line_selected() {
        let value = FacetValue {
            value: "Audio".to_string(),
            count: 3,
            selected: true,
        };
        assert_eq!(console::strip_ansi_codes(&facet_line(&value)), "Audio (3) ✓");
    }
}
