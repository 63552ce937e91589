//! Product catalog module.
//!
//! Contains types for products and category labels.

mod category;
mod product;

pub use category::Category;
pub use product::{Product, ProductBuilder, MAX_RATING};
