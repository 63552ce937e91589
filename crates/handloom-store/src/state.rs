//! Application state.

use handloom_commerce::cart::Cart;
use handloom_commerce::catalog::Product;
use handloom_commerce::search::Filters;
use serde::{Deserialize, Serialize};

/// UI flags the store owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Whether the cart panel is open.
    pub show_cart: bool,
}

/// Everything the storefront renders from.
///
/// Owned by a [`StoreProvider`](crate::StoreProvider); outside code reads
/// snapshots and submits [`Action`](crate::Action)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Catalog as last loaded. Replaced wholesale on each load.
    pub products: Vec<Product>,
    /// Cart lines in add order.
    pub cart: Cart,
    /// UI flags.
    pub ui: UiState,
    /// Listing filters.
    pub filters: Filters,
}

impl AppState {
    /// Initial state: no products, empty cart, cart closed, default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with custom starting filters.
    pub fn with_filters(filters: Filters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }
}
