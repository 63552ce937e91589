//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when building or combining storefront values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product identifier is empty.
    #[error("Product id must not be empty")]
    EmptyId,

    /// Rating outside the 0..=5 scale.
    #[error("Invalid rating {rating} for product {product_id}: expected 0..=5")]
    InvalidRating { product_id: String, rating: f32 },

    /// Price range with the lower bound above the upper bound.
    #[error("Invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: u64, max: u64 },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
