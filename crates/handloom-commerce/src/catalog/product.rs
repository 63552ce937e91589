//! Product type.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating on the review scale.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Products are created by the catalog source and never mutated afterwards;
/// the cart stores copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category label.
    pub category: Category,
    /// Current price.
    pub price: Money,
    /// Price before markdown. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image URI.
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product is handmade.
    pub handmade: bool,
}

impl Product {
    /// Start building a product.
    pub fn builder(id: impl Into<ProductId>, name: impl Into<String>) -> ProductBuilder {
        ProductBuilder::new(id, name)
    }

    /// Check the invariants a catalog payload must uphold.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.is_empty() {
            return Err(CommerceError::EmptyId);
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRating {
                product_id: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    /// Check if the product is marked down from its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op > self.price)
            .unwrap_or(false)
    }

    /// Markdown percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op > self.price {
                let savings = op.saturating_sub(self.price);
                Some((savings.amount() as f64 / op.amount() as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Whole stars to render for the rating.
    pub fn star_count(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).round() as u8
    }
}

/// Builder for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    /// Create a builder with empty optional fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            product: Product {
                id: id.into(),
                name: name.into(),
                category: Category::new(""),
                price: Money::zero(),
                original_price: None,
                image: String::new(),
                rating: 0.0,
                reviews: 0,
                handmade: false,
            },
        }
    }

    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.product.category = category.into();
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.product.price = price;
        self
    }

    pub fn original_price(mut self, price: Money) -> Self {
        self.product.original_price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.product.image = image.into();
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.product.rating = rating;
        self
    }

    pub fn reviews(mut self, reviews: u32) -> Self {
        self.product.reviews = reviews;
        self
    }

    pub fn handmade(mut self, handmade: bool) -> Self {
        self.product.handmade = handmade;
        self
    }

    /// Validate and return the product.
    pub fn build(self) -> Result<Product, CommerceError> {
        self.product.validate()?;
        Ok(self.product)
    }
}
