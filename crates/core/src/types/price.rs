//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept exact while summing; rounding to two places only happens
//! in [`Price::display`].

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero USD price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::USD)
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Returns `true` if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Format for display, rounded half away from zero to two places
    /// (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        format!("{}{rounded}", self.currency_code.symbol())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(s: &str) -> Price {
        Price::new(s.parse().unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(usd("3").display(), "$3.00");
        assert_eq!(usd("1.5").display(), "$1.50");
        assert_eq!(usd("19.99").display(), "$19.99");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        assert_eq!(usd("0.125").display(), "$0.13");
        assert_eq!(usd("0.135").display(), "$0.14");
        assert_eq!(usd("2.004").display(), "$2.00");
    }

    #[test]
    fn test_times_and_sum_are_exact() {
        let total: Price = [usd("0.1").times(3), usd("0.2").times(1)].into_iter().sum();
        assert_eq!(total.amount, "0.5".parse::<Decimal>().unwrap());
        assert_eq!(usd("1.5").times(2).amount, Decimal::from(3));
    }

    #[test]
    fn test_is_negative() {
        assert!(usd("-0.01").is_negative());
        assert!(!usd("0").is_negative());
        assert!(!usd("2.5").is_negative());
    }
}
