//! Laptop advisor: budget and company preferences for the Computers
//! category.

use serde::{Deserialize, Serialize};

use crate::catalog::CategorySelection;
use crate::money::{Currency, Money};
use crate::search::{FilterState, PriceRange};

/// Category that triggers the advisor prompt.
pub const LAPTOP_CATEGORY: &str = "Computers";

/// Company choices offered by the prompt. `"all"` means no preference.
pub const LAPTOP_COMPANIES: &[&str] = &["all", "TechBook", "Apple", "Dell", "HP", "Lenovo"];

/// Check whether selecting `category` should open the advisor prompt.
pub fn should_prompt(category: &CategorySelection) -> bool {
    category.matches(LAPTOP_CATEGORY) && !category.is_all()
}

/// Preferences collected by the advisor prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LaptopPreferences {
    /// Maximum list price. `None` keeps the current range.
    pub budget: Option<Money>,
    /// Preferred brand. `None` keeps the current brand selection.
    pub company: Option<String>,
}

impl LaptopPreferences {
    /// Parse raw form input. A blank, non-numeric or non-positive budget
    /// and a blank or `"all"` company mean "no preference".
    pub fn parse(budget: &str, company: &str, currency: Currency) -> Self {
        let budget = budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b > 0.0)
            .map(|b| Money::from_decimal(b, currency));
        let company = company.trim();
        let company = if company.is_empty() || company.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(company.to_string())
        };
        Self { budget, company }
    }

    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.company.is_none()
    }

    /// Narrow `state` to laptops within budget from the chosen company.
    pub fn apply_to(&self, state: &mut FilterState) {
        state.category = CategorySelection::named(LAPTOP_CATEGORY);
        if let Some(budget) = self.budget {
            state.price_range = PriceRange::new(Money::zero(budget.currency), budget);
        }
        if let Some(company) = &self.company {
            state.brands = vec![company.clone()];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_only_for_computers() {
        assert!(should_prompt(&CategorySelection::named("Computers")));
        assert!(!should_prompt(&CategorySelection::named("Audio")));
        assert!(!should_prompt(&CategorySelection::All));
    }

    #[test]
    fn test_parse_preferences() {
        let prefs = LaptopPreferences::parse("1000", "Dell", Currency::USD);
        assert_eq!(prefs.budget, Some(Money::from_whole(1000, Currency::USD)));
        assert_eq!(prefs.company.as_deref(), Some("Dell"));

        let none = LaptopPreferences::parse("abc", "all", Currency::USD);
        assert!(none.is_empty());
        assert!(LaptopPreferences::parse("-5", "", Currency::USD).is_empty());
    }

    #[test]
    fn test_apply_sets_range_and_brand() {
        let mut state = FilterState {
            brands: vec!["SoundCore".to_string()],
            ..FilterState::default()
        };
        LaptopPreferences::parse("900", "Apple", Currency::USD).apply_to(&mut state);
        assert!(state.category.matches(LAPTOP_CATEGORY));
        assert_eq!(state.price_range, PriceRange::whole(0, 900, Currency::USD));
        assert_eq!(state.brands, vec!["Apple".to_string()]);
    }

    #[test]
    fn test_apply_without_preferences_keeps_filters() {
        let mut state = FilterState {
            tags: vec!["new".to_string()],
            ..FilterState::default()
        };
        LaptopPreferences::default().apply_to(&mut state);
        assert_eq!(state.price_range, PriceRange::default());
        assert_eq!(state.tags, vec!["new".to_string()]);
    }
}
