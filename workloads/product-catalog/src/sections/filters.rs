//! Filters section - sidebar with every filter dimension.

use storefront_catalog::catalog::color;
use storefront_catalog::prelude::*;
use storefront_catalog::search::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

use super::html_escape;
use crate::query::{link_after, price_param};

/// Render the filters sidebar section.
pub fn render_filters(controller: &FilterController<'_>, facets: &Facets) -> String {
    let state = controller.state();

    let categories_html: String = facets
        .categories
        .values
        .iter()
        .map(|v| {
            let href = link_after(controller, |c| c.set_category(v.value.as_str()));
            let class = if v.selected { "filter-option selected" } else { "filter-option" };
            format!(
                r#"<a href="{}" class="{}">{} <span class="facet-count">({})</span></a>"#,
                html_escape(&href),
                class,
                html_escape(&v.value),
                v.count
            )
        })
        .collect();

    let brands_html = render_toggle_group(&facets.brands, |value| {
        link_after(controller, |c| c.toggle_brand(value))
    });
    let tags_html = render_toggle_group(&facets.tags, |value| {
        link_after(controller, |c| c.toggle_tag(value))
    });
    let colors_html = render_color_group(&facets.colors, |value| {
        link_after(controller, |c| c.toggle_color(value))
    });

    let in_stock_href = link_after(controller, |c| c.set_in_stock_only(!state.in_stock_only));
    let on_sale_href = link_after(controller, |c| c.set_discounted_only(!state.discounted_only));
    let reset_href = link_after(controller, |c| c.reset_all());

    format!(
        r#"<aside class="filters-sidebar" data-section="filters">
    <div class="filters-header">
        <h2>Filters</h2>
        <a href="{reset}" class="reset-all">Reset All</a>
    </div>

    <div class="filter-group" data-filter="category">
        <h3 class="filter-title">Categories</h3>
        <div class="filter-options">{categories}</div>
    </div>

    <div class="filter-group" data-filter="price">
        <h3 class="filter-title">Price Range</h3>
        <form class="price-form" onsubmit="return applyPrice(this)">
            <input type="number" name="min_price" min="{floor}" max="{ceiling}" step="any" value="{min}" aria-label="Minimum price">
            <span>-</span>
            <input type="number" name="max_price" min="{floor}" max="{ceiling}" step="any" value="{max}" aria-label="Maximum price">
            <button type="submit">Apply</button>
        </form>
        <div class="price-labels"><span>{min_label}</span><span>{max_label}</span></div>
    </div>

    {brands}
    {tags}
    {colors}

    <div class="filter-group" data-filter="availability">
        <h3 class="filter-title">Availability</h3>
        <a href="{in_stock_href}" class="{in_stock_class}">In Stock Only</a>
        <a href="{on_sale_href}" class="{on_sale_class}">On Sale</a>
    </div>
</aside>"#,
        reset = html_escape(&reset_href),
        categories = categories_html,
        floor = DEFAULT_PRICE_MIN,
        ceiling = DEFAULT_PRICE_MAX,
        min = price_param(&state.price_range.min),
        max = price_param(&state.price_range.max),
        min_label = state.price_range.min.display_compact(),
        max_label = state.price_range.max.display_compact(),
        brands = brands_html,
        tags = tags_html,
        colors = colors_html,
        in_stock_href = html_escape(&in_stock_href),
        in_stock_class = option_class(state.in_stock_only),
        on_sale_href = html_escape(&on_sale_href),
        on_sale_class = option_class(state.discounted_only),
    )
}

fn render_toggle_group(facet: &Facet, href_for: impl Fn(&str) -> String) -> String {
    if facet.values.is_empty() {
        return String::new();
    }

    let values_html: String = facet
        .values
        .iter()
        .map(|v| {
            format!(
                r#"<a href="{}" class="{}" data-value="{}">
            <span class="checkbox">{}</span>
            <span class="facet-label">{}</span>
            <span class="facet-count">({})</span>
        </a>"#,
                html_escape(&href_for(&v.value)),
                option_class(v.selected),
                html_escape(&v.value),
                if v.selected { "&#10003;" } else { "" },
                html_escape(&v.value),
                v.count
            )
        })
        .collect();

    format!(
        r#"<div class="filter-group" data-filter="{}">
        <h3 class="filter-title">{}</h3>
        <div class="filter-options">
            {}
        </div>
    </div>"#,
        facet.key, facet.name, values_html
    )
}

fn render_color_group(facet: &Facet, href_for: impl Fn(&str) -> String) -> String {
    if facet.values.is_empty() {
        return String::new();
    }

    let swatches: String = facet
        .values
        .iter()
        .map(|v| {
            let border = if color::needs_border(&v.value) { " bordered" } else { "" };
            let ring = if v.selected { " selected" } else { "" };
            format!(
                r#"<a href="{}" class="color-swatch{}{}" style="background:{}" title="{}">{}</a>"#,
                html_escape(&href_for(&v.value)),
                border,
                ring,
                color::swatch(&v.value),
                html_escape(&v.value),
                if v.selected { "&#10003;" } else { "" }
            )
        })
        .collect();

    format!(
        r#"<div class="filter-group" data-filter="{}">
        <h3 class="filter-title">{}</h3>
        <div class="color-options">{}</div>
    </div>"#,
        facet.key, facet.name, swatches
    )
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "filter-option selected"
    } else {
        "filter-option"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_links_toggle() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        controller.toggle_brand("SoundCore");
        let view = controller.view();
        let html = render_filters(&controller, &view.facets);

        // Selected brand links back to the unfiltered page.
        assert!(html.contains(r#"<a href="/products" class="filter-option selected" data-value="SoundCore">"#));
        assert!(html.contains("brand=SoundCore&amp;brand=FitPulse"));
    }

    #[test]
    fn test_computers_link_opens_advisor() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        let view = controller.view();
        let html = render_filters(&controller, &view.facets);
        assert!(html.contains("/products?category=Computers&amp;advisor=1"));
    }

    #[test]
    fn test_color_swatches_rendered() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        let view = controller.view();
        let html = render_filters(&controller, &view.facets);
        assert!(html.contains(r##"style="background:#374151" title="space gray""##));
        assert!(html.contains("color-swatch bordered"));
    }

    #[test]
    fn test_price_inputs_keep_cents() {
        let catalog = Catalog::seed().unwrap();
        let mut controller = FilterController::new(&catalog);
        controller.set_price_range(PriceRange::new(
            Money::from_whole(0, Currency::USD),
            Money::new(99950, Currency::USD),
        ));
        let view = controller.view();
        let html = render_filters(&controller, &view.facets);
        assert!(html.contains(r#"name="min_price" min="0" max="1500" step="any" value="0""#));
        assert!(html.contains(r#"name="max_price" min="0" max="1500" step="any" value="999.50""#));
    }
}
