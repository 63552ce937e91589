//! Store provider and handles.
//!
//! A [`StoreProvider`] owns the one `AppState` and is the provisioning scope
//! for [`Store`] handles. Handles are passed explicitly to whatever needs
//! them; they do not keep the state alive, so a handle used after its
//! provider is gone fails with [`StoreError::NotInitialized`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::watch;

use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::apply;
use crate::state::AppState;

#[derive(Debug)]
struct Shared {
    state: watch::Sender<Arc<AppState>>,
    version: AtomicU64,
}

/// Owner of the application state.
///
/// Dropping the provider ends the provisioning scope for every handle.
#[derive(Debug)]
pub struct StoreProvider {
    shared: Arc<Shared>,
}

impl StoreProvider {
    /// Provision a store with the initial state.
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    /// Provision a store starting from `initial`.
    pub fn with_state(initial: AppState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self {
            shared: Arc::new(Shared {
                state,
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Hand out a handle bound to this provider.
    pub fn store(&self) -> Store {
        Store {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl Default for StoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a provisioned store.
///
/// Cheap to clone. `Store::default()` is a handle that was never
/// provisioned; every operation on it fails fast.
#[derive(Debug, Clone, Default)]
pub struct Store {
    shared: Weak<Shared>,
}

impl Store {
    /// A handle with no provider.
    pub fn detached() -> Self {
        Self::default()
    }

    fn shared(&self) -> Result<Arc<Shared>, StoreError> {
        self.shared.upgrade().ok_or(StoreError::NotInitialized)
    }

    /// Whether the provider is still alive.
    pub fn is_provisioned(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Apply an action.
    ///
    /// Transitions run one at a time under the state cell's write lock, so
    /// concurrent dispatches are applied sequentially and none are lost.
    /// The version is bumped under the same lock as the state it counts.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let shared = self.shared()?;
        let kind = action.kind();
        let mut version = 0;
        shared.state.send_modify(|state| {
            let current = Arc::unwrap_or_clone(std::mem::take(state));
            *state = Arc::new(apply(current, action));
            version = shared.version.fetch_add(1, Ordering::SeqCst) + 1;
        });
        tracing::debug!(action = kind, version, "dispatched");
        Ok(())
    }

    /// Shared reference to the current state.
    pub fn snapshot(&self) -> Result<Arc<AppState>, StoreError> {
        let shared = self.shared()?;
        let state = Arc::clone(&shared.state.borrow());
        Ok(state)
    }

    /// Owned copy of the current state.
    pub fn state(&self) -> Result<AppState, StoreError> {
        Ok(AppState::clone(&*self.snapshot()?))
    }

    /// Run `f` against the current state.
    ///
    /// `f` sees a snapshot taken before it runs, so it may dispatch through
    /// this or any other handle; those changes are not visible to it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> Result<R, StoreError> {
        let state = self.snapshot()?;
        Ok(f(&state))
    }

    /// Current state together with the number of actions that produced it.
    pub fn versioned(&self) -> Result<(u64, Arc<AppState>), StoreError> {
        let shared = self.shared()?;
        let state = shared.state.borrow();
        let version = shared.version.load(Ordering::SeqCst);
        let snapshot = Arc::clone(&state);
        drop(state);
        Ok((version, snapshot))
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> Result<watch::Receiver<Arc<AppState>>, StoreError> {
        Ok(self.shared()?.state.subscribe())
    }

    /// Number of actions dispatched so far.
    pub fn version(&self) -> Result<u64, StoreError> {
        Ok(self.versioned()?.0)
    }
}
