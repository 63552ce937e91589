//! Loading the catalog into a store.

use std::sync::Arc;

use handloom_catalog::{CatalogError, CatalogSource, FetchState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::error::StoreError;
use crate::scope::{Scope, ScopeToken};
use crate::store::Store;

/// What happened to one catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Products were dispatched to the store.
    Applied { products: usize },
    /// The source failed; `products` was left as it was.
    Failed(CatalogError),
    /// The scope was torn down before the fetch resolved.
    Discarded,
}

/// Fetch the catalog and submit exactly one `SetProducts` if `token` is still live.
///
/// A failed fetch is reported in the outcome, not as an error: the store
/// keeps its previous products and the caller can show "not loaded".
pub async fn load_catalog<S>(
    source: &S,
    store: &Store,
    token: &ScopeToken,
) -> Result<LoadOutcome, StoreError>
where
    S: CatalogSource + ?Sized,
{
    let result = source.fetch_products().await;

    if !token.is_live() {
        tracing::debug!(
            source = source.name(),
            generation = token.generation(),
            "scope torn down before catalog resolved, discarding"
        );
        return Ok(LoadOutcome::Discarded);
    }

    match result {
        Ok(products) => {
            let count = products.len();
            store.dispatch(Action::SetProducts(products))?;
            tracing::info!(source = source.name(), products = count, "catalog loaded");
            Ok(LoadOutcome::Applied { products: count })
        }
        Err(err) => {
            tracing::warn!(source = source.name(), error = %err, "catalog not loaded");
            Ok(LoadOutcome::Failed(err))
        }
    }
}

/// A catalog load running in the background on behalf of one consumer.
///
/// Tearing down (or dropping) the load marks its scope stale; a fetch that
/// resolves afterwards is discarded. The fetch itself keeps running.
#[derive(Debug)]
pub struct CatalogLoad {
    scope: Scope,
    status: watch::Receiver<FetchState<usize>>,
    task: Option<JoinHandle<Result<LoadOutcome, StoreError>>>,
}

impl CatalogLoad {
    /// Mount a new scope and start fetching. Must be called within a tokio runtime.
    pub fn spawn(store: Store, source: Arc<dyn CatalogSource>) -> Self {
        let scope = Scope::new();
        let token = scope.mount();
        let (status_tx, status) = watch::channel(FetchState::Loading);

        let task = tokio::spawn(async move {
            let outcome = load_catalog(&source, &store, &token).await;
            match &outcome {
                Ok(LoadOutcome::Applied { products }) => {
                    status_tx.send_replace(FetchState::Loaded(*products));
                }
                Ok(LoadOutcome::Failed(err)) => {
                    status_tx.send_replace(FetchState::Failed(err.clone()));
                }
                // Nobody is waiting on a torn-down scope.
                Ok(LoadOutcome::Discarded) => {}
                Err(err) => {
                    let reason = format!("catalog could not be applied: {}", err);
                    status_tx.send_replace(FetchState::Failed(CatalogError::unavailable(reason)));
                }
            }
            outcome
        });

        Self {
            scope,
            status,
            task: Some(task),
        }
    }

    /// Current fetch state: loading, loaded (product count), or failed.
    pub fn status(&self) -> FetchState<usize> {
        self.status.borrow().clone()
    }

    /// Receiver notified when the fetch state changes.
    pub fn watch_status(&self) -> watch::Receiver<FetchState<usize>> {
        self.status.clone()
    }

    /// Stop caring about the result.
    pub fn teardown(&self) {
        self.scope.teardown();
    }

    /// Wait for the fetch to finish and report what happened to it.
    pub async fn join(mut self) -> Result<LoadOutcome, StoreError> {
        match self.task.take() {
            Some(task) => task.await.map_err(|e| StoreError::Task(e.to_string()))?,
            None => Ok(LoadOutcome::Discarded),
        }
    }
}

impl Drop for CatalogLoad {
    fn drop(&mut self) {
        self.scope.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreProvider;
    use handloom_catalog::MockCatalog;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_load_applies_products() {
        let provider = StoreProvider::new();
        let store = provider.store();
        let scope = Scope::new();
        let token = scope.mount();

        let outcome = load_catalog(&MockCatalog::handloom(), &store, &token).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Applied { products: 3 });
        assert_eq!(store.read(|s| s.products.len()).unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_keeps_products() {
        let provider = StoreProvider::new();
        let store = provider.store();
        let token = Scope::new().mount();

        let outcome = load_catalog(&MockCatalog::unavailable(), &store, &token).await.unwrap();

        assert!(matches!(outcome, LoadOutcome::Failed(CatalogError::Unavailable { .. })));
        assert!(store.read(|s| s.products.is_empty()).unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_token_discards() {
        let provider = StoreProvider::new();
        let store = provider.store();
        let scope = Scope::new();
        let token = scope.mount();
        scope.teardown();

        let outcome = load_catalog(&MockCatalog::handloom(), &store, &token).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(store.version().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_store_fails_fast() {
        let token = Scope::new().mount();
        let result = load_catalog(&MockCatalog::handloom(), &Store::detached(), &token).await;
        assert_eq!(result, Err(StoreError::NotInitialized));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_load_reports_status() {
        let provider = StoreProvider::new();
        let load = CatalogLoad::spawn(provider.store(), Arc::new(MockCatalog::handloom()));
        assert!(load.status().is_loading());

        let mut status = load.watch_status();
        status.changed().await.unwrap();
        assert_eq!(load.status(), FetchState::Loaded(3));
        assert_eq!(load.join().await.unwrap(), LoadOutcome::Applied { products: 3 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_load_without_store_reports_failure() {
        let load = CatalogLoad::spawn(Store::detached(), Arc::new(MockCatalog::handloom()));

        let mut status = load.watch_status();
        status.changed().await.unwrap();

        assert!(matches!(
            load.status(),
            FetchState::Failed(CatalogError::Unavailable { .. })
        ));
        assert_eq!(load.join().await, Err(StoreError::NotInitialized));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_resolution() {
        let provider = StoreProvider::new();
        let store = provider.store();
        let load = CatalogLoad::spawn(store.clone(), Arc::new(MockCatalog::handloom()));

        tokio::time::sleep(Duration::from_millis(100)).await;
        load.teardown();

        assert_eq!(load.join().await.unwrap(), LoadOutcome::Discarded);
        assert!(store.read(|s| s.products.is_empty()).unwrap());
    }
}
