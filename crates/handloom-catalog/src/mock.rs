//! In-memory catalog source that simulates network latency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use handloom_commerce::catalog::Product;

use crate::error::CatalogError;
use crate::fixtures::handloom_collection;
use crate::source::{decode_products, CatalogSource};

/// Latency the storefront demo simulates before the catalog resolves.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(700);

/// Catalog source over a fixed product list.
///
/// Resolves after `delay`. Can be told to fail its first N calls (or every
/// call) with [`CatalogError::Unavailable`] to exercise the error path.
#[derive(Debug)]
pub struct MockCatalog {
    products: Vec<Product>,
    delay: Duration,
    failures_remaining: AtomicUsize,
    calls: AtomicUsize,
}

impl MockCatalog {
    /// Create a mock over the given products with the default latency.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            delay: DEFAULT_LATENCY,
            failures_remaining: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock serving the Handloom Heritage collection.
    pub fn handloom() -> Self {
        Self::new(handloom_collection())
    }

    /// Mock over a JSON product list.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(decode_products(json.as_bytes())?))
    }

    /// Mock that never resolves successfully.
    pub fn unavailable() -> Self {
        Self::new(Vec::new()).failing_first(usize::MAX)
    }

    /// Set the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fail the first `n` calls before serving products.
    pub fn failing_first(self, n: usize) -> Self {
        self.failures_remaining.store(n, Ordering::SeqCst);
        self
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The configured latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn take_failure(&self) -> bool {
        self.failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| match n {
                0 => None,
                usize::MAX => Some(usize::MAX),
                n => Some(n - 1),
            })
            .is_ok()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::handloom()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(call, delay_ms = self.delay.as_millis() as u64, "mock catalog fetch");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.take_failure() {
            return Err(CatalogError::unavailable("mock catalog configured to fail"));
        }
        Ok(self.products.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
