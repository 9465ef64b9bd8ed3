//! Product grid section - cards or the no-results state.

use storefront_catalog::catalog::slugify;
use storefront_catalog::prelude::*;
use storefront_catalog::search::NO_RESULTS_MESSAGE;

use super::html_escape;

/// Render the product grid section.
pub fn render_grid(view: &CatalogView<'_>) -> String {
    if view.is_empty() {
        return render_no_results();
    }

    let cards: String = view.products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="catalog-results" data-section="results">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

fn render_product_card(product: &Product) -> String {
    let discount_badge = if product.is_discounted() {
        format!(r#"<span class="badge badge-discount">{}% OFF</span>"#, product.discount)
    } else {
        String::new()
    };

    let stock_overlay = if product.in_stock {
        ""
    } else {
        r#"<div class="out-of-stock">Out of Stock</div>"#
    };

    let tag_badges: String = [("new", "New"), ("bestseller", "Bestseller"), ("premium", "Premium")]
        .iter()
        .filter(|(tag, _)| product.has_tag(tag))
        .map(|(tag, label)| format!(r#"<span class="badge badge-{}">{}</span>"#, tag, label))
        .collect();

    let list_price = if product.is_discounted() {
        format!(r#"<span class="price-list">{}</span>"#, product.price.display())
    } else {
        String::new()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}" data-category="{category_slug}">
    <div class="product-image">
        {discount_badge}
        {stock_overlay}
        <div class="product-tags">{tag_badges}</div>
        <img src="{image}" alt="{name}" loading="lazy">
    </div>
    <div class="product-info">
        <span class="badge badge-category">{category}</span>
        <h3 class="product-title">{name}</h3>
        <div class="product-rating">
            {stars}
            <span class="rating-value">{rating:.1}</span>
        </div>
        <div class="product-price">
            {list_price}
            <span class="price-effective">{effective}</span>
        </div>
    </div>
    <button class="add-to-cart" data-product-id="{id}"{disabled}>
        Add to Cart
    </button>
</article>"#,
        id = product.id,
        category_slug = slugify(&product.category),
        discount_badge = discount_badge,
        stock_overlay = stock_overlay,
        tag_badges = tag_badges,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        stars = render_stars(product.rating),
        rating = product.rating,
        list_price = list_price,
        effective = product.effective_price().display(),
        disabled = if product.in_stock { "" } else { " disabled" },
    )
}

fn render_stars(rating: f64) -> String {
    let full_stars = rating.clamp(0.0, 5.0).floor() as u32;

    let mut html = String::from(r#"<span class="stars">"#);
    for i in 0..5 {
        if i < full_stars {
            html.push_str(r#"<span class="star full">★</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">☆</span>"#);
        }
    }
    html.push_str("</span>");
    html
}

/// Render the distinct empty-result state.
pub fn render_no_results() -> String {
    format!(
        r#"<section class="catalog-results empty" data-section="results">
    <div class="empty-state">
        <h2>{}</h2>
        <p>Try adjusting your filters or search terms.</p>
    </div>
</section>"#,
        NO_RESULTS_MESSAGE
    )
}
