//! Laptop advisor dialog - shown after switching to Computers.

use storefront_catalog::prelude::*;
use storefront_catalog::search::advisor::{LAPTOP_CATEGORY, LAPTOP_COMPANIES};

use super::html_escape;
use crate::query::{state_params, state_url, CATALOG_PATH};

/// Render the advisor dialog. Empty unless `open` and the Computers
/// category is selected.
pub fn render_laptop_advisor(state: &FilterState, open: bool) -> String {
    if !open || !state.category.matches(LAPTOP_CATEGORY) || state.category.is_all() {
        return String::new();
    }

    // Carry the current filters through the form submission.
    let hidden: String = state_params(state)
        .iter()
        .filter(|(key, _)| *key != "category")
        .map(|(key, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                key,
                html_escape(value)
            )
        })
        .collect();

    let companies: String = LAPTOP_COMPANIES
        .iter()
        .map(|company| {
            let label = if *company == "all" { "Any company" } else { *company };
            format!(r#"<option value="{}">{}</option>"#, company, label)
        })
        .collect();

    format!(
        r#"<div class="advisor-backdrop" data-section="laptop-advisor">
    <dialog class="advisor-dialog" open>
        <h2>Find your laptop</h2>
        <p>Tell us your budget and preferred company and we'll narrow the list.</p>
        <form action="{path}" method="GET" class="advisor-form">
            <input type="hidden" name="category" value="{category}">
            {hidden}
            <label for="budget">Budget</label>
            <input type="number" id="budget" name="budget" min="1" step="any" placeholder="e.g. 1000">
            <label for="company">Company</label>
            <select id="company" name="company">
                {companies}
            </select>
            <div class="advisor-actions">
                <a href="{skip}" class="advisor-skip">Skip</a>
                <button type="submit">Show laptops</button>
            </div>
        </form>
    </dialog>
</div>"#,
        path = CATALOG_PATH,
        category = LAPTOP_CATEGORY,
        hidden = hidden,
        companies = companies,
        skip = html_escape(&state_url(state)),
    )
}
