//! Product Catalog Page - filterable, sortable product listing.
//!
//! The whole filter state lives in the query string, so every control on
//! the page is a plain link or GET form:
//! - Category, brand, tag, color and availability filters
//! - Inclusive price range and free-text search
//! - Removable active-filter chips with Clear All
//! - Laptop advisor dialog after switching to Computers

mod query;
mod sections;

use spin_sdk::http::{Method, Request, Response};
use spin_sdk::http_component;
use tracing::{debug, info, warn};

use storefront_catalog::prelude::*;

use query::CatalogQuery;
use sections::{
    render_active_filters, render_catalog_header, render_filters, render_grid,
    render_laptop_advisor,
};

/// Product Catalog page handler.
#[http_component]
fn handle_catalog(req: Request) -> anyhow::Result<Response> {
    init_tracing();

    if *req.method() != Method::Get {
        warn!(method = ?req.method(), "rejected non-GET request");
        return Ok(Response::builder()
            .status(405)
            .header("allow", "GET")
            .body("Method Not Allowed")
            .build());
    }

    let catalog = Catalog::seed()?;
    let query = CatalogQuery::parse(req.query(), catalog.currency());
    debug!(query = req.query(), "parsed catalog query");

    let (html, count) = render_page(&catalog, query);
    info!(count, "rendered catalog page");

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-result-count", count.to_string())
        .body(html)
        .build())
}

/// Install the stderr subscriber once per instance.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog=info,storefront_catalog=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Render the full page for a parsed query. Returns the HTML and the
/// number of products shown.
fn render_page(catalog: &Catalog, query: CatalogQuery) -> (String, usize) {
    let mut controller = FilterController::with_state(catalog, query.state);
    if let Some(preferences) = query.laptop_preferences {
        controller.apply_laptop_preferences(preferences);
    }
    for event in controller.drain_events() {
        debug!(?event, "catalog event");
    }

    let view = controller.view();
    let state = controller.state();

    let body = format!(
        r#"{header}
{active}
<div class="catalog-layout">
    {filters}
    <div class="catalog-main">
        {grid}
    </div>
</div>
{advisor}"#,
        header = render_catalog_header(&view, state),
        active = render_active_filters(&controller, &view.active_filters),
        filters = render_filters(&controller, &view.facets),
        grid = render_grid(&view),
        advisor = render_laptop_advisor(state, query.advisor_open),
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Browse and filter our product catalog">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
<header class="site-header">
    <a href="/" class="logo">Storefront</a>
    <nav class="header-nav">
        <a href="/products">Products</a>
        <a href="/cart">Cart</a>
    </nav>
</header>
<main>
{body}
</main>
{scripts}
</body>
</html>"#,
        title = page_title(state),
        styles = CATALOG_STYLES,
        body = body,
        scripts = CATALOG_SCRIPTS,
    );

    (html, view.count())
}

fn page_title(state: &FilterState) -> String {
    if state.category.is_all() {
        "Product Catalog".to_string()
    } else {
        format!("{} - Product Catalog", state.category)
    }
}

const CATALOG_SCRIPTS: &str = r#"<script>
function updateSort(value) {
    const url = new URL(window.location);
    if (value === 'price-asc') {
        url.searchParams.delete('sort');
    } else {
        url.searchParams.set('sort', value);
    }
    url.searchParams.delete('advisor');
    window.location = url;
}

function submitSearch(form) {
    const url = new URL(window.location);
    const q = form.q.value.trim();
    if (q) {
        url.searchParams.set('q', q);
    } else {
        url.searchParams.delete('q');
    }
    url.searchParams.delete('advisor');
    window.location = url;
    return false;
}

function clearSearch() {
    const url = new URL(window.location);
    url.searchParams.delete('q');
    url.searchParams.delete('advisor');
    window.location = url;
}

function applyPrice(form) {
    const url = new URL(window.location);
    url.searchParams.set('min_price', form.min_price.value || '0');
    url.searchParams.set('max_price', form.max_price.value || '0');
    url.searchParams.delete('advisor');
    window.location = url;
    return false;
}
</script>"#;

const CATALOG_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #22c55e;
    --warning: #f59e0b;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    text-decoration: none;
}

.header-nav { display: flex; gap: 1.5rem; }
.header-nav a { color: var(--text); text-decoration: none; }

main {
    max-width: 1400px;
    margin: 0 auto;
    padding: 2rem;
}

/* Header */
.catalog-header {
    display: grid;
    gap: 1rem;
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.catalog-info h1 { font-size: 1.75rem; }
.catalog-subtitle, .result-count { color: var(--text-muted); }

.catalog-controls {
    display: flex;
    gap: 1rem;
    align-items: center;
}

.search-form {
    display: flex;
    flex: 1;
    max-width: 600px;
    position: relative;
}

.search-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 1rem;
}

.clear-search {
    position: absolute;
    right: 0.75rem;
    top: 50%;
    transform: translateY(-50%);
    background: none;
    border: none;
    cursor: pointer;
    font-size: 1.25rem;
    color: var(--text-muted);
}

.sort-control { display: flex; align-items: center; gap: 0.5rem; }

.sort-control select {
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
}

/* Active filters */
.active-filters {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}

.active-filters-label { font-weight: 600; font-size: 0.875rem; }

.active-filter {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.25rem 0.5rem;
    background: var(--primary);
    color: white;
    border-radius: 999px;
    font-size: 0.875rem;
}

.active-filter a { color: white; text-decoration: none; }

.chip-swatch {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 50%;
    border: 1px solid white;
}

.clear-all { color: var(--primary); font-size: 0.875rem; }

/* Layout */
.catalog-layout {
    display: grid;
    grid-template-columns: 280px 1fr;
    gap: 2rem;
}

/* Filters */
.filters-sidebar {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.5rem;
    height: fit-content;
    position: sticky;
    top: 100px;
}

.filters-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
}

.filters-header h2 { font-size: 1.125rem; }
.reset-all { color: var(--primary); font-size: 0.875rem; }

.filter-group {
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.filter-group:last-child { border-bottom: none; margin-bottom: 0; }

.filter-title {
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-muted);
}

.filter-option {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 0;
    color: var(--text);
    text-decoration: none;
    font-size: 0.9375rem;
}

.filter-option.selected { color: var(--primary); font-weight: 600; }

.checkbox {
    display: inline-flex;
    width: 1rem;
    height: 1rem;
    border: 1px solid var(--border);
    border-radius: 3px;
    font-size: 0.75rem;
    justify-content: center;
    align-items: center;
}

.facet-count { color: var(--text-muted); font-size: 0.875rem; }

.price-form { display: flex; gap: 0.5rem; align-items: center; }
.price-form input { width: 5rem; padding: 0.375rem; border: 1px solid var(--border); border-radius: 6px; }
.price-labels { display: flex; justify-content: space-between; color: var(--text-muted); font-size: 0.875rem; }

.color-options { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.color-swatch {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    color: white;
    text-decoration: none;
}

.color-swatch.bordered { border: 1px solid var(--border); color: var(--text); }
.color-swatch.selected { box-shadow: 0 0 0 2px var(--card-bg), 0 0 0 4px var(--primary); }

/* Product grid */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
    display: flex;
    flex-direction: column;
}

.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }

.product-image {
    aspect-ratio: 1;
    overflow: hidden;
    background: #f1f5f9;
    position: relative;
}

.product-image img { width: 100%; height: 100%; object-fit: cover; }

.badge {
    display: inline-block;
    padding: 0.125rem 0.5rem;
    border-radius: 4px;
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-discount { position: absolute; top: 0.5rem; left: 0.5rem; background: var(--error); color: white; }
.product-tags { position: absolute; top: 0.5rem; right: 0.5rem; display: flex; flex-direction: column; gap: 0.25rem; }
.badge-new { background: var(--success); color: white; }
.badge-bestseller { background: var(--warning); color: white; }
.badge-premium { background: #7c3aed; color: white; }
.badge-category { background: #f1f5f9; color: var(--text-muted); margin-bottom: 0.5rem; }

.out-of-stock {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(15, 23, 42, 0.55);
    color: white;
    font-weight: 700;
}

.product-info { padding: 1rem; flex: 1; }

.product-title { font-size: 1rem; font-weight: 500; margin-bottom: 0.5rem; }

.product-rating { display: flex; align-items: center; gap: 0.25rem; margin-bottom: 0.5rem; }
.star.full { color: var(--warning); }
.star.empty { color: var(--border); }
.rating-value { color: var(--text-muted); font-size: 0.875rem; }

.product-price { display: flex; align-items: baseline; gap: 0.5rem; }
.price-list { text-decoration: line-through; color: var(--text-muted); font-size: 0.875rem; }
.price-effective { font-size: 1.25rem; font-weight: 700; }

.add-to-cart {
    margin: 0 1rem 1rem;
    padding: 0.625rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
    font-weight: 500;
}

.add-to-cart:hover { background: var(--primary-hover); }
.add-to-cart[disabled] { background: var(--border); color: var(--text-muted); cursor: not-allowed; }

.empty-state {
    text-align: center;
    padding: 4rem 2rem;
    background: var(--card-bg);
    border-radius: 12px;
}

.empty-state h2 { margin-bottom: 0.5rem; }
.empty-state p { color: var(--text-muted); }

/* Laptop advisor */
.advisor-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(15, 23, 42, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 200;
}

.advisor-dialog {
    position: static;
    border: none;
    border-radius: 12px;
    padding: 2rem;
    max-width: 420px;
    width: 100%;
}

.advisor-dialog h2 { margin-bottom: 0.5rem; }
.advisor-dialog p { color: var(--text-muted); margin-bottom: 1rem; }
.advisor-form { display: grid; gap: 0.5rem; }
.advisor-form input, .advisor-form select { padding: 0.5rem; border: 1px solid var(--border); border-radius: 6px; }
.advisor-actions { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }

.advisor-actions button {
    padding: 0.625rem 1.25rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

@media (max-width: 900px) {
    .catalog-layout { grid-template-columns: 1fr; }
    .filters-sidebar { position: static; }
    .catalog-controls { flex-direction: column; align-items: stretch; }
}
"##;
