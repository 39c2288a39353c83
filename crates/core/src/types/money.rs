//! Type-safe money representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money with its currency.
///
/// Amounts are held as [`Decimal`] in the currency's standard unit
/// (dollars, not cents) so arithmetic never goes through floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create an amount from the smallest currency unit (e.g., cents for USD).
    #[must_use]
    pub fn from_cents(cents: i64, currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Format for display (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        let price = Money::new(Decimal::new(72, 1), CurrencyCode::USD);
        assert_eq!(price.display(), "$7.20");
    }

    #[test]
    fn test_display_whole_amount() {
        let price = Money::new(Decimal::from(5), CurrencyCode::USD);
        assert_eq!(price.display(), "$5.00");
    }

    #[test]
    fn test_from_cents() {
        let price = Money::from_cents(199, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(199, 2));
        assert_eq!(price.display(), "$1.99");
    }

    #[test]
    fn test_zero() {
        let price = Money::zero(CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::ZERO);
        assert_eq!(price.display(), "$0.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::GBP.symbol(), "\u{a3}");
        assert_eq!(CurrencyCode::EUR.symbol(), "\u{20ac}");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::USD.code(), "USD");
        assert_eq!(CurrencyCode::AUD.code(), "AUD");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Money::from_cents(649, CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
