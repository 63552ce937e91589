//! Storefront domain types for Handloom.
//!
//! This crate provides the plain values the storefront state is built from:
//!
//! - **Catalog**: Products and their category labels
//! - **Cart**: Positional cart lines and cart pricing
//! - **Search**: Price/category filters and partial filter updates
//!
//! # Example
//!
//! ```rust
//! use handloom_commerce::prelude::*;
//!
//! let saree = Product::builder("1", "Traditional Kanchipuram Silk Saree")
//!     .category("SAREES")
//!     .price(Money::new(12500))
//!     .original_price(Money::new(15000))
//!     .rating(4.5)
//!     .build()
//!     .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.push(saree.clone());
//! cart.push(saree);
//!
//! let pricing = cart.calculate_pricing().unwrap();
//! assert_eq!(pricing.subtotal.display(), "\u{20b9}25000");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Category, Product, ProductBuilder};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing};

    // Search
    pub use crate::search::{Filters, FiltersPatch};
}
