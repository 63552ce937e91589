//! Read-side derivations over [`AppState`].

use handloom_commerce::cart::CartPricing;
use handloom_commerce::catalog::Product;
use handloom_commerce::{CommerceError, Money, ProductId};

use crate::state::AppState;

/// Sum of cart line prices.
pub fn cart_total(state: &AppState) -> Result<Money, CommerceError> {
    Ok(state.cart.calculate_pricing()?.subtotal)
}

/// Full cart pricing summary.
pub fn cart_pricing(state: &AppState) -> Result<CartPricing, CommerceError> {
    state.cart.calculate_pricing()
}

/// Number of cart lines (the header badge).
pub fn cart_count(state: &AppState) -> usize {
    state.cart.len()
}

/// Look up a loaded product.
pub fn product_by_id<'a>(state: &'a AppState, id: &ProductId) -> Option<&'a Product> {
    state.products.iter().find(|p| &p.id == id)
}

/// Products passing the active filters, in catalog order.
pub fn visible_products(state: &AppState) -> Vec<&Product> {
    state
        .products
        .iter()
        .filter(|p| state.filters.matches(p))
        .collect()
}

/// Whether any catalog has been loaded.
pub fn catalog_loaded(state: &AppState) -> bool {
    !state.products.is_empty()
}
