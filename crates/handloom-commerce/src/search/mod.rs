//! Search module.
//!
//! Contains the listing filters and partial filter updates.

mod filter;

pub use filter::{Filters, FiltersPatch, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
