//! Catalog header section - title, search box, sort control and count.

use storefront_catalog::prelude::*;

use super::html_escape;
use crate::query::CATALOG_PATH;

/// Render the catalog header section.
pub fn render_catalog_header(view: &CatalogView<'_>, state: &FilterState) -> String {
    let sort_html: String = SortOption::ALL
        .iter()
        .map(|opt| {
            let selected = if *opt == state.sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                opt.as_str(),
                selected,
                opt.display_name()
            )
        })
        .collect();

    let clear_search = if state.search.is_empty() {
        String::new()
    } else {
        r#"<button type="button" class="clear-search" onclick="clearSearch()" aria-label="Clear search">&times;</button>"#
            .to_string()
    };

    format!(
        r#"<section class="catalog-header" data-section="catalog-header">
    <div class="catalog-info">
        <h1>Product Catalog</h1>
        <p class="catalog-subtitle">Discover our wide range of tech products</p>
    </div>
    <div class="catalog-controls">
        <form action="{path}" method="GET" class="search-form" onsubmit="return submitSearch(this)">
            <input type="search" name="q" value="{search}" placeholder="Search products..." aria-label="Search">
            {clear_search}
        </form>
        <div class="sort-control">
            <label for="sort">Sort by:</label>
            <select id="sort" name="sort" onchange="updateSort(this.value)">
                {sort_html}
            </select>
        </div>
    </div>
    <p class="result-count">{summary}</p>
</section>"#,
        path = CATALOG_PATH,
        search = html_escape(&state.search),
        clear_search = clear_search,
        sort_html = sort_html,
        summary = view.summary(),
    )
}
