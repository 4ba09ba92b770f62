//! Patch pipeline error types.

use keel_core::{IdParseError, Method, ResourceId};
use keel_registry::Cardinality;
use keel_repository::RepositoryError;
use thiserror::Error;

/// Result type for patch pipeline operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while handling a partial-update request.
///
/// Every stage fails fast: the first error aborts the request and nothing
/// is persisted. Variants carry structured context for the transport layer
/// to render; this crate never formats user-facing messages itself.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Path or body references an unregistered resource type.
    #[error("Unknown resource type: {type_name}")]
    ResourceTypeNotFound { type_name: String },

    /// The operation requires a body and none was supplied.
    #[error("{method} to {type_name} requires a request body")]
    RequestBodyMissing { method: Method, type_name: String },

    /// Structural violation in the request body.
    #[error("Invalid {method} body for {type_name}: {reason}")]
    RequestBodyInvalid {
        method: Method,
        type_name: String,
        reason: String,
    },

    /// Body-declared type incompatible with the path-addressed type.
    #[error("Body type {body_type} is not compatible with path type {path_type}")]
    TypeMismatch {
        path_type: String,
        body_type: String,
    },

    /// Path shape unsuitable for a single-resource mutation.
    #[error("Invalid path for {type_name}: {reason}")]
    InvalidPath { type_name: String, reason: String },

    /// An identifier could not be parsed with the target type's semantics.
    #[error(transparent)]
    IdentifierParse(#[from] IdParseError),

    /// No existing instance for the resolved identifier.
    #[error("No {type_name} resource with id {id}")]
    TargetNotFound { type_name: String, id: ResourceId },

    /// A referenced relationship target does not exist.
    #[error("Relationship {relationship} references missing {type_name} resource {id}")]
    RelatedResourceNotFound {
        relationship: String,
        type_name: String,
        id: ResourceId,
    },

    /// A declared attribute's value does not fit its declared kind.
    #[error("Invalid value for attribute {attr}: expected {expected}, got {actual}")]
    AttributeType {
        attr: String,
        expected: String,
        actual: String,
    },

    /// Supplied linkage shape contradicts the declared cardinality.
    #[error("Relationship {relationship} expects {expected} linkage")]
    RelationshipCardinality {
        relationship: String,
        expected: Cardinality,
    },

    /// Opaque failure surfaced by a repository; propagated, not interpreted.
    #[error("Persistence failure: {message}")]
    Persistence { message: String },
}

impl PatchError {
    pub fn resource_type_not_found(type_name: impl Into<String>) -> Self {
        Self::ResourceTypeNotFound {
            type_name: type_name.into(),
        }
    }

    pub fn body_missing(method: Method, type_name: impl Into<String>) -> Self {
        Self::RequestBodyMissing {
            method,
            type_name: type_name.into(),
        }
    }

    pub fn body_invalid(
        method: Method,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RequestBodyInvalid {
            method,
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(path_type: impl Into<String>, body_type: impl Into<String>) -> Self {
        Self::TypeMismatch {
            path_type: path_type.into(),
            body_type: body_type.into(),
        }
    }

    pub fn invalid_path(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn target_not_found(type_name: impl Into<String>, id: ResourceId) -> Self {
        Self::TargetNotFound {
            type_name: type_name.into(),
            id,
        }
    }

    pub fn related_not_found(
        relationship: impl Into<String>,
        type_name: impl Into<String>,
        id: ResourceId,
    ) -> Self {
        Self::RelatedResourceNotFound {
            relationship: relationship.into(),
            type_name: type_name.into(),
            id,
        }
    }

    pub fn attribute_type(
        attr: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::AttributeType {
            attr: attr.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn relationship_cardinality(
        relationship: impl Into<String>,
        expected: Cardinality,
    ) -> Self {
        Self::RelationshipCardinality {
            relationship: relationship.into(),
            expected,
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Map a repository failure on the mutation target.
    pub(crate) fn from_target_repository(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { type_name, id } => Self::target_not_found(type_name, id),
            RepositoryError::Backend { message } => Self::persistence(message),
        }
    }
}
