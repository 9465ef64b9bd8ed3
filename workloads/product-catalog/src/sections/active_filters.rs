//! Active filters section - removable chips for every non-default filter.

use storefront_catalog::catalog::color;
use storefront_catalog::prelude::*;

use super::html_escape;
use crate::query::link_after;

/// Render the active filter chips. Empty when nothing is filtered.
pub fn render_active_filters(controller: &FilterController<'_>, active: &[ActiveFilter]) -> String {
    if active.is_empty() {
        return String::new();
    }

    let chips: String = active
        .iter()
        .map(|filter| {
            let href = link_after(controller, |c| c.remove_filter(filter));
            let dot = match filter {
                ActiveFilter::Color(name) => format!(
                    r#"<span class="chip-swatch" style="background:{}"></span>"#,
                    color::swatch(name)
                ),
                _ => String::new(),
            };
            format!(
                r#"<span class="active-filter" data-filter="{}">
                {}{}
                <a href="{}" aria-label="Remove filter">&times;</a>
            </span>"#,
                filter.key(),
                dot,
                html_escape(&filter.label()),
                html_escape(&href)
            )
        })
        .collect();

    let clear_href = link_after(controller, |c| c.reset_all());

    format!(
        r#"<div class="active-filters" data-section="active-filters">
    <span class="active-filters-label">Active Filters:</span>
    {}
    <a href="{}" class="clear-all">Clear All</a>
</div>"#,
        chips,
        html_escape(&clear_href)
    )
}
