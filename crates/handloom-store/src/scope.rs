//! Mount scopes for consumers of asynchronous results.
//!
//! A scope carries a generation counter. Each mount takes a token stamped
//! with the generation it started in; remounting or tearing down bumps the
//! counter, which turns every outstanding token stale. Work that finishes
//! with a stale token must drop its result instead of applying it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifecycle of one consuming component.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    generation: Arc<AtomicU64>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new mount. Tokens from earlier mounts become stale.
    pub fn mount(&self) -> ScopeToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        ScopeToken {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// End the current mount.
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Proof of interest held by in-flight work.
#[derive(Debug, Clone)]
pub struct ScopeToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl ScopeToken {
    /// Whether the mount that issued this token is still current.
    pub fn is_live(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    /// Generation this token was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
