//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing summary for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Number of lines.
    pub line_count: usize,
    /// Sum of line prices.
    pub subtotal: Money,
    /// Sum of original prices, falling back to the line price.
    pub list_total: Money,
}

impl CartPricing {
    /// Markdown savings against the original prices.
    pub fn savings(&self) -> Money {
        self.list_total.saturating_sub(self.subtotal)
    }
}
