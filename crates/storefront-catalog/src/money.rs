//! Money type for representing prices.
//!
//! Uses cents-based integer representation so that price comparisons in
//! the filter engine are exact.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "INR" => Ok(Currency::INR),
            _ => Err(CatalogError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents. Ordering compares the amount first, which
/// is what range checks and price sorts need within one catalog currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the cent.
    ///
    /// ```
    /// use storefront_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(149.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 14999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a Money value from whole currency units.
    pub fn from_whole(units: i64, currency: Currency) -> Self {
        Self::new(units * 100, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Whole currency units, truncated.
    pub fn whole_units(&self) -> i64 {
        self.amount_cents / 100
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Format without cents when the amount is whole (e.g., "$1500").
    pub fn display_compact(&self) -> String {
        if self.amount_cents % 100 == 0 {
            format!("{}{}", self.currency.symbol(), self.whole_units())
        } else {
            self.display()
        }
    }

    /// Apply a percentage discount, rounding to the cent.
    pub fn discounted(&self, percent: u32) -> Money {
        let factor = 1.0 - f64::from(percent.min(100)) / 100.0;
        Money::new(
            (self.amount_cents as f64 * factor).round() as i64,
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(199.99, Currency::USD);
        assert_eq!(m.amount_cents, 19999);

        let m = Money::from_decimal(0.1 + 0.2, Currency::USD);
        assert_eq!(m.amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::from_whole(1500, Currency::USD).display_compact(), "$1500");
        assert_eq!(Money::new(4999, Currency::USD).display_compact(), "$49.99");
        assert_eq!(Money::new(100, Currency::INR).display(), "\u{20b9}1.00");
    }

    #[test]
    fn test_money_discounted() {
        let m = Money::from_decimal(199.99, Currency::USD);
        assert_eq!(m.discounted(25).amount_cents, 14999);
        assert_eq!(m.discounted(0), m);
        assert_eq!(m.discounted(100).amount_cents, 0);
        assert_eq!(m.discounted(250).amount_cents, 0);
    }

    #[test]
    fn test_money_ordering() {
        let a = Money::from_decimal(129.99, Currency::USD);
        let b = Money::from_decimal(149.99, Currency::USD);
        assert!(a < b);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
        assert!(matches!(
            Currency::from_code("XYZ"),
            Err(CatalogError::UnknownCurrency(_))
        ));
    }
}
