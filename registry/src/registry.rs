//! The ResourceRegistry - immutable resource type lookup.

use crate::{FieldDef, RelationshipDef, ResourceInfo};
use keel_repository::{ParamProvider, Repository, RepositoryFactory};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry record binding a type name to metadata and a repository
/// accessor.
pub struct RegistryEntry {
    info: ResourceInfo,
    repository: RepositoryFactory,
}

impl RegistryEntry {
    pub(crate) fn new(info: ResourceInfo, repository: RepositoryFactory) -> Self {
        Self { info, repository }
    }

    /// The resource metadata.
    pub fn info(&self) -> &ResourceInfo {
        &self.info
    }

    /// Construct the repository for this type, parameterized by the
    /// request-scoped provider.
    pub fn repository(&self, provider: &dyn ParamProvider) -> Arc<dyn Repository> {
        (self.repository)(provider)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// The registry provides runtime lookup of resource type entries.
/// It is immutable after construction and safely shareable across
/// requests.
#[derive(Debug)]
pub struct ResourceRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl ResourceRegistry {
    pub(crate) fn new(entries: HashMap<String, RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Get the entry registered under a type name.
    pub fn entry(&self, type_name: &str) -> Option<&RegistryEntry> {
        self.entries.get(type_name)
    }

    /// Check if a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Number of registered resource types.
    pub fn resource_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether a body-declared type is compatible with a path-addressed
    /// type: identical, or a transitively declared subtype of it.
    pub fn is_compatible(&self, body_type: &str, path_type: &str) -> bool {
        if body_type == path_type {
            return true;
        }
        // Parent chains are acyclic by construction (builder rejects cycles).
        let mut current = self.parent_of(body_type);
        while let Some(parent) = current {
            if parent == path_type {
                return true;
            }
            current = self.parent_of(parent);
        }
        false
    }

    /// Get an attribute definition for a type, including inherited
    /// attributes from parent types.
    pub fn attribute_of(&self, type_name: &str, attr_name: &str) -> Option<&FieldDef> {
        let mut current = Some(type_name);
        while let Some(name) = current {
            let entry = self.entry(name)?;
            if let Some(attr) = entry.info().attribute(attr_name) {
                return Some(attr);
            }
            current = entry.info().parent();
        }
        None
    }

    /// Get a relationship definition for a type, including inherited
    /// relationships from parent types.
    pub fn relationship_of(&self, type_name: &str, rel_name: &str) -> Option<&RelationshipDef> {
        let mut current = Some(type_name);
        while let Some(name) = current {
            let entry = self.entry(name)?;
            if let Some(rel) = entry.info().relationship(rel_name) {
                return Some(rel);
            }
            current = entry.info().parent();
        }
        None
    }

    fn parent_of(&self, type_name: &str) -> Option<&str> {
        self.entry(type_name).and_then(|e| e.info().parent())
    }
}
