//! Repository error types.

use keel_core::ResourceId;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// No instance exists for the given identifier.
    #[error("no {type_name} resource with id {id}")]
    NotFound { type_name: String, id: ResourceId },

    /// Opaque backend failure; propagated uninterpreted.
    #[error("persistence failure: {message}")]
    Backend { message: String },
}

impl RepositoryError {
    pub fn not_found(type_name: impl Into<String>, id: ResourceId) -> Self {
        Self::NotFound {
            type_name: type_name.into(),
            id,
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
