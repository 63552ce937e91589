//! Store error types.

use thiserror::Error;

/// Errors surfaced by store handles and catalog loads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The handle was never provisioned, or its provider has been dropped.
    #[error("Store not initialized: handle used outside its provider")]
    NotInitialized,

    /// The background catalog load panicked or was aborted.
    #[error("Catalog load task failed: {0}")]
    Task(String),
}
