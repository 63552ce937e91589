//! Cart and cart line types.

use crate::cart::CartPricing;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One positional entry in the cart: a copy of the product at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartLine {
    product: Product,
}

impl CartLine {
    /// Copy a product into a new line.
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    /// The product snapshot this line holds.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Id of the product.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Price captured when the line was added.
    pub fn price(&self) -> Money {
        self.product.price
    }
}

impl From<Product> for CartLine {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}

/// A shopping cart.
///
/// Lines are never merged: adding the same product twice yields two
/// entries, and removal is by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product as a new line. Returns the line's position.
    pub fn push(&mut self, product: Product) -> usize {
        self.lines.push(CartLine::new(product));
        self.lines.len() - 1
    }

    /// Remove the line at `index`.
    ///
    /// An index outside the cart leaves every line in place and returns false.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line at a position.
    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Iterate over lines in cart order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let prices: Vec<Money> = self.lines.iter().map(CartLine::price).collect();
        let subtotal = Money::try_sum(prices.iter())?;

        let list_prices: Vec<Money> = self
            .lines
            .iter()
            .map(|l| l.product().original_price.unwrap_or_else(|| l.price()))
            .collect();
        let list_total = Money::try_sum(list_prices.iter())?;

        Ok(CartPricing {
            line_count: self.lines.len(),
            subtotal,
            list_total,
        })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl FromIterator<Product> for Cart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(CartLine::new).collect(),
        }
    }
}
