//! Response envelope assembly.

use keel_core::{QueryParams, Resource};
use keel_repository::{JsonMap, Repository};
use serde::Serialize;

/// The outbound structure pairing the persisted instance with optional
/// meta- and links-information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Primary data: the canonical persisted instance.
    pub data: Resource,
    /// Optional meta-information from the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonMap>,
    /// Optional links-information from the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<JsonMap>,
}

/// Build the envelope for a persisted instance, collecting optional
/// meta/links from the repository. A repository without these
/// capabilities yields none and the sections are omitted.
pub fn assemble(repository: &dyn Repository, saved: Resource, params: &QueryParams) -> Envelope {
    let instances = std::slice::from_ref(&saved);
    let meta = repository.meta(instances, params);
    let links = repository.links(instances, params);
    Envelope {
        data: saved,
        meta,
        links,
    }
}
