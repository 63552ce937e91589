//! Reducer-style state store for the Handloom storefront.
//!
//! All application state lives in one [`AppState`] owned by a
//! [`StoreProvider`]. Components get a [`Store`] handle, read snapshots, and
//! submit [`Action`]s; [`apply`] turns (state, action) into the next state.
//! The catalog arrives asynchronously through [`CatalogLoad`], whose result
//! is dropped if its consumer was torn down first.
//!
//! ```rust
//! use handloom_store::{Action, StoreProvider};
//! use handloom_catalog::handloom_collection;
//!
//! let provider = StoreProvider::new();
//! let store = provider.store();
//!
//! let products = handloom_collection();
//! store.dispatch(Action::SetProducts(products.clone())).unwrap();
//! store.dispatch(Action::AddToCart(products[0].clone())).unwrap();
//!
//! let total = store.read(handloom_store::selectors::cart_total).unwrap().unwrap();
//! assert_eq!(total.amount(), 12500);
//! ```

mod action;
mod error;
mod loader;
mod reducer;
mod scope;
mod state;
mod store;

pub mod selectors;

pub use action::Action;
pub use error::StoreError;
pub use loader::{load_catalog, CatalogLoad, LoadOutcome};
pub use reducer::apply;
pub use scope::{Scope, ScopeToken};
pub use state::{AppState, UiState};
pub use store::{Store, StoreProvider};
