//! Storefront wiring: store, catalog source, and page scopes.

use std::sync::Arc;

use anyhow::{Context, Result};
use handloom_catalog::{CatalogSource, FetchState, MockCatalog, RetryingSource};
use handloom_commerce::catalog::Product;
use handloom_observability::{init_logging, LoggingError};
use handloom_store::selectors::visible_products;
use handloom_store::{AppState, CatalogLoad, LoadOutcome, Store, StoreError, StoreProvider};

use crate::config::StorefrontConfig;

/// A running storefront.
///
/// Owns the store provider; every [`Store`] handed out by [`Storefront::store`]
/// stops working once the storefront is dropped.
pub struct Storefront {
    config: StorefrontConfig,
    provider: StoreProvider,
    source: Arc<dyn CatalogSource>,
}

impl Storefront {
    /// Install logging, then build the storefront.
    ///
    /// An already-installed subscriber is kept.
    pub fn launch(config: StorefrontConfig) -> Result<Self> {
        match init_logging(&config.logging) {
            Ok(()) | Err(LoggingError::AlreadyInitialized) => {}
            Err(e) => return Err(e).context("Failed to initialize logging"),
        }
        Self::new(config)
    }

    /// Build the storefront without touching global logging.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let filters = config
            .initial_filters()
            .context("Invalid initial filters")?;
        let provider = StoreProvider::with_state(AppState::with_filters(filters));

        let mock = MockCatalog::handloom().with_delay(config.catalog.delay());
        let source: Arc<dyn CatalogSource> =
            Arc::new(RetryingSource::new(mock, config.catalog.retry_policy()));

        tracing::info!(
            source = source.name(),
            delay_ms = config.catalog.delay_ms,
            max_retries = config.catalog.max_retries,
            "storefront ready"
        );

        Ok(Self {
            config,
            provider,
            source,
        })
    }

    /// Replace the catalog source.
    pub fn with_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.source = source;
        self
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Handle to the store.
    pub fn store(&self) -> Store {
        self.provider.store()
    }

    /// Mount the home page: starts loading the catalog into the store.
    ///
    /// Must be called within a tokio runtime.
    pub fn mount_home(&self) -> HomeView {
        let store = self.store();
        let load = CatalogLoad::spawn(store.clone(), Arc::clone(&self.source));
        HomeView { store, load }
    }
}

/// The mounted home page.
///
/// Dropping the view tears it down; a catalog that resolves afterwards is
/// not applied.
pub struct HomeView {
    store: Store,
    load: CatalogLoad,
}

impl HomeView {
    /// Catalog fetch state.
    pub fn status(&self) -> FetchState<usize> {
        self.load.status()
    }

    /// Whether the "Loading products..." indicator shows.
    pub fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    /// Products the listing renders under the current filters.
    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        self.store
            .read(|state| visible_products(state).into_iter().cloned().collect())
    }

    /// Unmount the page.
    pub fn teardown(&self) {
        self.load.teardown();
    }

    /// Wait for the catalog fetch to settle.
    pub async fn join(self) -> Result<LoadOutcome, StoreError> {
        self.load.join().await
    }
}
