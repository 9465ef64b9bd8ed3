//! Query string <-> filter state.

use storefront_catalog::prelude::*;

/// Base path of the catalog page.
pub const CATALOG_PATH: &str = "/products";

/// Everything the page reads from its query string.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub state: FilterState,
    /// Submitted laptop advisor form, if any.
    pub laptop_preferences: Option<LaptopPreferences>,
    /// Open the laptop advisor dialog.
    pub advisor_open: bool,
}

impl CatalogQuery {
    /// Parse the page query string. Unknown keys and malformed values are
    /// ignored and leave the corresponding field at its default.
    pub fn parse(qs: &str, currency: Currency) -> Self {
        let mut state = FilterState::for_currency(currency);
        let mut budget = None;
        let mut company = None;
        let mut advisor_open = false;

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = urlencoding_decode(parts.next().unwrap_or(""));

            match key {
                "category" => state.category = CategorySelection::named(value),
                "min_price" => {
                    if let Some(min) = parse_price(&value, currency) {
                        state.price_range.min = min;
                    }
                }
                "max_price" => {
                    if let Some(max) = parse_price(&value, currency) {
                        state.price_range.max = max;
                    }
                }
                "brand" => push_unique(&mut state.brands, value),
                "tag" => push_unique(&mut state.tags, value),
                "color" => push_unique(&mut state.colors, value),
                "in_stock" => state.in_stock_only = is_truthy(&value),
                "on_sale" => state.discounted_only = is_truthy(&value),
                "q" => state.search = value,
                "sort" => {
                    if let Ok(sort) = value.parse() {
                        state.sort = sort;
                    }
                }
                "budget" => budget = Some(value),
                "company" => company = Some(value),
                "advisor" => advisor_open = is_truthy(&value),
                _ => {}
            }
        }

        let laptop_preferences = if budget.is_some() || company.is_some() {
            Some(LaptopPreferences::parse(
                budget.as_deref().unwrap_or(""),
                company.as_deref().unwrap_or(""),
                currency,
            ))
        } else {
            None
        };

        Self {
            state,
            laptop_preferences,
            advisor_open,
        }
    }
}

/// Query parameters for every non-default field of `state`.
pub fn state_params(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = Vec::new();

    if !state.category.is_all() {
        params.push(("category", state.category.as_str().to_string()));
    }
    if !state.price_range.is_default() {
        params.push(("min_price", price_param(&state.price_range.min)));
        params.push(("max_price", price_param(&state.price_range.max)));
    }
    params.extend(state.brands.iter().map(|b| ("brand", b.clone())));
    params.extend(state.tags.iter().map(|t| ("tag", t.clone())));
    params.extend(state.colors.iter().map(|c| ("color", c.clone())));
    if state.in_stock_only {
        params.push(("in_stock", "1".to_string()));
    }
    if state.discounted_only {
        params.push(("on_sale", "1".to_string()));
    }
    if !state.search.is_empty() {
        params.push(("q", state.search.clone()));
    }
    if state.sort != SortOption::default() {
        params.push(("sort", state.sort.as_str().to_string()));
    }
    params
}

/// Serialize a filter state as a page URL. Default fields are omitted.
pub fn state_url(state: &FilterState) -> String {
    let params = state_params(state);
    if params.is_empty() {
        return CATALOG_PATH.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding_encode(v)))
        .collect();
    format!("{}?{}", CATALOG_PATH, query.join("&"))
}

/// URL of the state reached by running `op` on a copy of the controller.
///
/// A category change that asks for the laptop advisor opens it on the
/// target page.
pub fn link_after(
    controller: &FilterController<'_>,
    op: impl FnOnce(&mut FilterController<'_>),
) -> String {
    let mut next = FilterController::with_state(controller.catalog(), controller.state().clone());
    op(&mut next);
    let prompt = next.drain_events().iter().any(|e| {
        matches!(
            e,
            CatalogEvent::CategoryChanged {
                prompt_laptop_advisor: true,
                ..
            }
        )
    });
    let url = state_url(next.state());
    if prompt {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}advisor=1", url, sep)
    } else {
        url
    }
}

fn parse_price(value: &str, currency: Currency) -> Option<Money> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| Money::from_decimal(v, currency))
}

/// Price as a query/form value: whole units when there are no cents.
pub fn price_param(money: &Money) -> String {
    if money.amount_cents % 100 == 0 {
        money.whole_units().to_string()
    } else {
        format!("{:.2}", money.to_decimal())
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !value.is_empty() && !values.contains(&value) {
        values.push(value);
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on" | "yes")
}

/// Simple URL decoding.
fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hex: Vec<u8> = iter.by_ref().take(2).collect();
                let decoded = std::str::from_utf8(&hex)
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                if let Some(byte) = decoded {
                    bytes.push(byte);
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Simple URL encoding.
pub fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
