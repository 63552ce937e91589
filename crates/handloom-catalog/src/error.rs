//! Catalog error types.

use handloom_commerce::CommerceError;

/// Error type for catalog fetches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The source could not produce a catalog.
    #[error("Catalog unavailable: {reason}")]
    Unavailable { reason: String },

    /// The payload was not a product list.
    #[error("Catalog decode error: {0}")]
    Decode(String),

    /// A product in the payload broke a domain invariant.
    #[error("Invalid catalog entry: {0}")]
    Invalid(#[from] CommerceError),
}

impl CatalogError {
    /// Shorthand for [`CatalogError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether trying again could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}
