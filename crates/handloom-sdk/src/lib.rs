//! Application shell for the Handloom storefront.
//!
//! This crate re-exports the storefront crates and wires them together:
//!
//! ```ignore
//! use handloom_sdk::prelude::*;
//!
//! let config = StorefrontConfig::load("storefront.toml")?;
//! let app = Storefront::launch(config)?;
//!
//! let home = app.mount_home();
//! home.join().await?;
//!
//! app.store().dispatch(Action::AddToCart(product))?;
//! ```

mod app;
mod config;

pub use app::{HomeView, Storefront};
pub use config::{CatalogConfig, ConfigError, FilterConfig, StorefrontConfig};

pub use handloom_catalog;
pub use handloom_commerce;
pub use handloom_observability;
pub use handloom_store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{HomeView, Storefront, StorefrontConfig};
    pub use handloom_catalog::*;
    pub use handloom_commerce::prelude::*;
    pub use handloom_observability::*;
    pub use handloom_store::*;
}
