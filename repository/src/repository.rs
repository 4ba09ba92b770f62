//! The per-type repository trait.

use crate::{ParamProvider, RepositoryResult};
use keel_core::{QueryParams, Resource, ResourceId};
use std::sync::Arc;

/// Meta/links payloads as loose JSON maps.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Persistence operations for one resource type.
///
/// `meta` and `links` are optional capabilities; an implementation that
/// does not provide them yields `None` and the response envelope omits
/// the corresponding section.
pub trait Repository: Send + Sync {
    /// Fetch the instance with the given identifier.
    fn find_one(&self, id: &ResourceId, params: &QueryParams) -> RepositoryResult<Resource>;

    /// Persist an instance, returning the canonical persisted form.
    /// Implementations may normalize or stamp fields on save.
    fn save(&self, resource: Resource) -> RepositoryResult<Resource>;

    /// Optional meta-information for a set of instances.
    fn meta(&self, resources: &[Resource], params: &QueryParams) -> Option<JsonMap> {
        let _ = (resources, params);
        None
    }

    /// Optional links-information for a set of instances.
    fn links(&self, resources: &[Resource], params: &QueryParams) -> Option<JsonMap> {
        let _ = (resources, params);
        None
    }
}

/// Constructor for a repository instance, parameterized by the
/// request-scoped provider. Stored in registry entries and invoked once
/// per request.
pub type RepositoryFactory = Box<dyn Fn(&dyn ParamProvider) -> Arc<dyn Repository> + Send + Sync>;
