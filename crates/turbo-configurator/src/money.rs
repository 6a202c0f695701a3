//! Money type for product and variant prices.
//!
//! Uses cents-based integer representation; prices are only carried and
//! displayed here, never summed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
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
/// Deserializes from either `{ "amount_cents": 4999, "currency": "USD" }` or
/// the storefront's decimal form `{ "amount": 49.99, "currency": "USD" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "RawMoney")]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from the decimal amount the catalog reports.
    ///
    /// ```
    /// use turbo_configurator::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let divisor = 10_i64.pow(self.currency.decimal_places());
        let decimal = self.amount_cents as f64 / divisor as f64;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMoney {
    Cents {
        amount_cents: i64,
        #[serde(default)]
        currency: Currency,
    },
    Decimal {
        amount: f64,
        #[serde(default)]
        currency: Currency,
    },
}

impl From<RawMoney> for Money {
    fn from(raw: RawMoney) -> Self {
        match raw {
            RawMoney::Cents {
                amount_cents,
                currency,
            } => Money::new(amount_cents, currency),
            RawMoney::Decimal { amount, currency } => Money::from_decimal(amount, currency),
        }
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
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).amount_cents, 100);
    }

    #[test]
    fn test_money_deserializes_cents_or_decimal() {
        let cents: Money =
            serde_json::from_str(r#"{"amount_cents": 4800, "currency": "EUR"}"#).unwrap();
        assert_eq!(cents, Money::new(4800, Currency::EUR));

        let decimal: Money = serde_json::from_str(r#"{"amount": 48.0, "currency": "EUR"}"#).unwrap();
        assert_eq!(decimal, Money::new(4800, Currency::EUR));

        let yen: Money = serde_json::from_str(r#"{"amount": 1200, "currency": "JPY"}"#).unwrap();
        assert_eq!(yen.amount_cents, 1200);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).to_string(), "\u{00a5}100");
    }
}
