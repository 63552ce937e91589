//! Catalog data access for the storefront.
//!
//! This crate provides:
//! - `CatalogSource` - The one-operation async contract the store loads from
//! - `MockCatalog` - Latency-simulating source over a fixed payload
//! - `RetryPolicy` / `RetryingSource` - Optional retry around any source
//! - `FetchState` - Loading / loaded / failed view of a fetch

mod error;
mod fetch;
mod fixtures;
mod mock;
mod retry;
mod source;

pub use error::*;
pub use fetch::*;
pub use fixtures::*;
pub use mock::*;
pub use retry::*;
pub use source::*;
