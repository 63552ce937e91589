//! Loading / loaded / failed view of a fetch.

use crate::error::CatalogError;

/// Progress of a single fetch as seen by the component waiting on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// The fetch has not resolved yet.
    #[default]
    Loading,
    /// The fetch resolved with data.
    Loaded(T),
    /// The fetch failed. Recoverable: the component can mount again.
    Failed(CatalogError),
}

impl<T> FetchState<T> {
    /// Check if still waiting.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if resolved with data.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The data, if loaded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The error, if failed.
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, CatalogError>> for FetchState<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Failed(err),
        }
    }
}
