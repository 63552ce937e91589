//! Money type for representing prices.
//!
//! Storefront prices are whole rupees, non-negative, and never fractional,
//! so the amount is an unsigned integer in the smallest unit the catalog
//! quotes. Arithmetic is checked; overflow surfaces as an error instead of
//! wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// A non-negative price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw amount in currency units.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Sum an iterator of amounts.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(), |acc, m| {
            acc.checked_add(*m).ok_or(CommerceError::Overflow)
        })
    }

    /// Format as a display string (e.g., "₹12500").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
