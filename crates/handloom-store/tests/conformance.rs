//! Behavioural guarantees of the store, exercised through the public API.

use std::sync::Arc;
use std::time::Duration;

use handloom_catalog::{handloom_collection, CatalogError, FetchState, MockCatalog};
use handloom_commerce::catalog::{Category, Product};
use handloom_commerce::search::{Filters, FiltersPatch};
use handloom_commerce::{Money, ProductId};
use handloom_store::selectors::{cart_total, visible_products};
use handloom_store::{
    apply, Action, AppState, CatalogLoad, LoadOutcome, Store, StoreError, StoreProvider,
};

fn product(id: &str) -> Product {
    handloom_collection()
        .into_iter()
        .find(|p| p.id == ProductId::new(id))
        .unwrap()
}

#[test]
fn test_initial_state() {
    let state = AppState::new();
    assert!(state.products.is_empty());
    assert!(state.cart.is_empty());
    assert!(!state.ui.show_cart);
    assert_eq!(state.filters, Filters::default());
    assert_eq!(state.filters.max_price, Money::new(50000));
}

#[test]
fn test_set_products_is_full_replacement() {
    let state = AppState::new()
        .apply(Action::SetProducts(vec![product("1"), product("2")]))
        .apply(Action::SetProducts(vec![product("3")]));
    assert_eq!(state.products, vec![product("3")]);
}

#[test]
fn test_add_to_cart_does_not_dedup() {
    let state = AppState::new()
        .apply(Action::AddToCart(product("2")))
        .apply(Action::AddToCart(product("2")));
    assert_eq!(state.cart.len(), 2);
    assert_eq!(state.cart.get(0), state.cart.get(1));
}

#[test]
fn test_remove_from_cart_positional() {
    let state = ["1", "2", "3"]
        .into_iter()
        .fold(AppState::new(), |s, id| s.apply(Action::AddToCart(product(id))));

    let after = state.apply(Action::RemoveFromCart(1));
    let ids: Vec<&str> = after.cart.iter().map(|l| l.product_id().as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let unchanged = after.clone().apply(Action::RemoveFromCart(2));
    assert_eq!(unchanged.cart, after.cart);
}

#[test]
fn test_set_filters_merges() {
    let state = AppState::new()
        .apply(Action::SetFilters(FiltersPatch::max_price(Money::new(1000))))
        .apply(Action::SetFilters(FiltersPatch::categories(["SAREES"])));

    let expected = Filters {
        categories: [Category::new("SAREES")].into_iter().collect(),
        min_price: Money::new(0),
        max_price: Money::new(1000),
    };
    assert_eq!(state.filters, expected);
}

#[test]
fn test_toggle_cart_is_a_set() {
    let once = AppState::new().apply(Action::ToggleCart(true));
    assert!(once.ui.show_cart);
    let twice = once.apply(Action::ToggleCart(true));
    assert!(twice.ui.show_cart);
}

#[test]
fn test_unknown_action_from_wire_is_noop() {
    let state = AppState::new().apply(Action::SetProducts(handloom_collection()));
    let action = Action::from_json(r#"{"type":"APPLY_COUPON","payload":{"code":"DIWALI"}}"#).unwrap();
    assert_eq!(action, Action::Unknown);
    assert_eq!(apply(state.clone(), action), state);
}

#[test]
fn test_end_to_end_cart_scenario() {
    let provider = StoreProvider::new();
    let store = provider.store();

    store.dispatch(Action::SetProducts(handloom_collection())).unwrap();
    let saree = store.read(|s| s.products[0].clone()).unwrap();
    assert_eq!(saree.id.as_str(), "1");

    store.dispatch(Action::AddToCart(saree.clone())).unwrap();
    store.dispatch(Action::AddToCart(saree)).unwrap();
    store.dispatch(Action::RemoveFromCart(0)).unwrap();

    let state = store.state().unwrap();
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart.get(0).unwrap().product_id().as_str(), "1");
    assert_eq!(cart_total(&state).unwrap(), Money::new(12500));
}

#[test]
fn test_store_outside_provider_fails_fast() {
    let store = Store::default();
    assert_eq!(store.dispatch(Action::Unknown), Err(StoreError::NotInitialized));
    assert_eq!(store.read(|s| s.cart.len()), Err(StoreError::NotInitialized));
}

#[test]
fn test_visible_products_follow_filters() {
    let state = AppState::new()
        .apply(Action::SetProducts(handloom_collection()))
        .apply(Action::SetFilters(FiltersPatch::toggle_category(
            &Filters::default(),
            "MEN'S KURTAS",
        )));

    let visible = visible_products(&state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "2");
    assert_eq!(state.products.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_catalog_load_applies_once() {
    let provider = StoreProvider::new();
    let store = provider.store();

    let load = CatalogLoad::spawn(store.clone(), Arc::new(MockCatalog::handloom()));
    assert!(store.read(|s| s.products.is_empty()).unwrap());

    assert_eq!(load.join().await.unwrap(), LoadOutcome::Applied { products: 3 });
    assert_eq!(store.read(|s| s.products.clone()).unwrap(), handloom_collection());
    assert_eq!(store.version().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_before_resolution_discards_result() {
    let provider = StoreProvider::new();
    let store = provider.store();
    store.dispatch(Action::SetProducts(vec![product("2")])).unwrap();

    let load = CatalogLoad::spawn(store.clone(), Arc::new(MockCatalog::handloom()));
    tokio::time::sleep(Duration::from_millis(350)).await;
    load.teardown();

    assert_eq!(load.join().await.unwrap(), LoadOutcome::Discarded);
    assert_eq!(store.read(|s| s.products.clone()).unwrap(), vec![product("2")]);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_load_discards_result() {
    let provider = StoreProvider::new();
    let store = provider.store();

    drop(CatalogLoad::spawn(store.clone(), Arc::new(MockCatalog::handloom())));
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(store.read(|s| s.products.is_empty()).unwrap());
    assert_eq!(store.version().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_catalog_is_recoverable() {
    let provider = StoreProvider::new();
    let store = provider.store();

    let load = CatalogLoad::spawn(store.clone(), Arc::new(MockCatalog::unavailable()));
    let mut status = load.watch_status();
    status.changed().await.unwrap();

    assert!(matches!(
        load.status(),
        FetchState::Failed(CatalogError::Unavailable { .. })
    ));
    assert!(matches!(load.join().await.unwrap(), LoadOutcome::Failed(_)));
    assert!(store.read(|s| s.products.is_empty()).unwrap());
}
