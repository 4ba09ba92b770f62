//! Relationship merge - resolves and applies supplied relationship
//! references.

use crate::error::{PatchError, PatchResult};
use keel_core::{
    DataElement, Linkage, QueryParams, RelationshipLinkage, Resource, ResourceId, ResourceLink,
    ResourceRef,
};
use keel_registry::{Cardinality, ResourceInfo, ResourceRegistry};
use keel_repository::{ParamProvider, RepositoryError};
use tracing::debug;

/// Merge supplied relationship references onto the target instance.
///
/// Every reference is resolved through the referenced type's own
/// repository before anything is applied, so a dangling reference aborts
/// the merge. A supplied to-many relationship replaces the existing
/// collection in full; relationships absent from the supplied map are
/// left untouched. Undeclared relationship names are skipped, matching
/// the attribute merge policy.
pub fn merge_relationships(
    registry: &ResourceRegistry,
    info: &ResourceInfo,
    data: &DataElement,
    params: &QueryParams,
    provider: &dyn ParamProvider,
    target: &mut Resource,
) -> PatchResult<()> {
    for (name, supplied) in &data.relationships {
        let Some(rel) = registry.relationship_of(info.type_name(), name) else {
            debug!(
                relationship = name.as_str(),
                type_name = info.type_name(),
                "skipping undeclared relationship"
            );
            continue;
        };

        match (rel.cardinality, &supplied.data) {
            (Cardinality::ToOne, RelationshipLinkage::ToOne(reference)) => {
                let link = match reference {
                    Some(reference) => {
                        Some(resolve_reference(registry, name, reference, params, provider)?)
                    }
                    // Explicit null clears the relationship.
                    None => None,
                };
                target.set_relationship(name.clone(), Linkage::ToOne(link));
            }
            (Cardinality::ToMany, RelationshipLinkage::ToMany(references)) => {
                let mut links = Vec::with_capacity(references.len());
                for reference in references {
                    links.push(resolve_reference(registry, name, reference, params, provider)?);
                }
                // Full replace: the prior collection is discarded.
                target.set_relationship(name.clone(), Linkage::ToMany(links));
            }
            (cardinality, _) => {
                return Err(PatchError::relationship_cardinality(name, cardinality));
            }
        }
    }

    Ok(())
}

/// Resolve one reference by fetching it through its own type's repository.
fn resolve_reference(
    registry: &ResourceRegistry,
    relationship: &str,
    reference: &ResourceRef,
    params: &QueryParams,
    provider: &dyn ParamProvider,
) -> PatchResult<ResourceLink> {
    let entry = registry
        .entry(&reference.type_name)
        .ok_or_else(|| PatchError::resource_type_not_found(&reference.type_name))?;

    let id = ResourceId::parse(&reference.id, entry.info().id_field().kind)?;

    let repository = entry.repository(provider);
    match repository.find_one(&id, params) {
        Ok(_) => Ok(ResourceLink::new(&reference.type_name, id)),
        Err(RepositoryError::NotFound { .. }) => Err(PatchError::related_not_found(
            relationship,
            &reference.type_name,
            id,
        )),
        Err(RepositoryError::Backend { message }) => Err(PatchError::persistence(message)),
    }
}
