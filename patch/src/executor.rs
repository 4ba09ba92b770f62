//! Patch executor - coordinates the partial-update pipeline.
//!
//! One linear pass per request: validate, fetch, merge attributes, merge
//! relationships, persist, assemble. Any failure aborts before the next
//! stage; nothing is persisted on a merge failure.

use crate::error::{PatchError, PatchResult};
use crate::ops;
use crate::response::{assemble, Envelope};
use crate::validate;
use keel_core::{Document, Method, QueryParams, ResourceId, ResourcePath};
use keel_registry::ResourceRegistry;
use keel_repository::ParamProvider;
use tracing::debug;

/// Partial-update executor.
pub struct PatchExecutor<'r> {
    registry: &'r ResourceRegistry,
}

impl<'r> PatchExecutor<'r> {
    /// Create a new executor over a bootstrapped registry.
    pub fn new(registry: &'r ResourceRegistry) -> Self {
        Self { registry }
    }

    /// The shared registry.
    pub fn registry(&self) -> &ResourceRegistry {
        self.registry
    }

    /// Whether this executor handles the given path/method pair: a PATCH
    /// addressed to a single resource, never a collection.
    pub fn accepts(&self, path: &ResourcePath, method: Method) -> bool {
        !path.is_collection() && method == Method::Patch
    }

    /// Handle a partial-update request.
    ///
    /// The path identifier is parsed with the body-declared type's
    /// identifier semantics; the repository is obtained from the
    /// path-addressed type's entry, constructed with the request-scoped
    /// provider.
    pub fn handle(
        &self,
        path: &ResourcePath,
        params: &QueryParams,
        provider: &dyn ParamProvider,
        body: Option<&Document>,
    ) -> PatchResult<Envelope> {
        let validated = validate::validate_request(self.registry, path, body)?;

        let raw_id = path.single_id().ok_or_else(|| {
            PatchError::invalid_path(path.type_name(), "expected exactly one identifier")
        })?;
        let id = ResourceId::parse(raw_id, validated.body_entry.info().id_field().kind)?;

        debug!(
            type_name = path.type_name(),
            id = %id,
            "handling partial update"
        );

        let repository = validated.path_entry.repository(provider);
        let mut resource = repository
            .find_one(&id, params)
            .map_err(PatchError::from_target_repository)?;

        ops::merge_attributes(
            self.registry,
            validated.body_entry.info(),
            validated.data,
            &mut resource,
        )?;
        ops::merge_relationships(
            self.registry,
            validated.body_entry.info(),
            validated.data,
            params,
            provider,
            &mut resource,
        )?;

        let saved = repository
            .save(resource)
            .map_err(PatchError::from_target_repository)?;

        Ok(assemble(repository.as_ref(), saved, params))
    }
}
