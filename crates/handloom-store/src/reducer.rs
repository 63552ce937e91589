//! The transition function.

use crate::action::Action;
use crate::state::{AppState, UiState};

/// Apply one action to a state, producing the next state.
///
/// Pure and total: no I/O, every action has a defined result, and
/// [`Action::Unknown`] returns the input unchanged. Each arm builds the
/// whole next state, so no partially applied state is ever observable.
pub fn apply(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetProducts(products) => AppState { products, ..state },
        Action::AddToCart(product) => {
            let mut cart = state.cart;
            cart.push(product);
            AppState { cart, ..state }
        }
        Action::RemoveFromCart(index) => {
            let mut cart = state.cart;
            cart.remove_at(index);
            AppState { cart, ..state }
        }
        Action::ToggleCart(show_cart) => AppState {
            ui: UiState { show_cart },
            ..state
        },
        Action::SetFilters(patch) => {
            let filters = state.filters.merge(patch);
            AppState { filters, ..state }
        }
        Action::Unknown => state,
    }
}

impl AppState {
    /// Method form of [`apply`].
    pub fn apply(self, action: Action) -> AppState {
        apply(self, action)
    }
}
