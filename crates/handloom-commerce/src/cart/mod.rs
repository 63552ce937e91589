//! Shopping cart module.
//!
//! Contains types for the positional cart and its pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::CartPricing;
