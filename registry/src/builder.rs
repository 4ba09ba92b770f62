//! RegistryBuilder for constructing an immutable ResourceRegistry.

use crate::{
    Cardinality, FieldDef, IdField, RegistryEntry, RelationshipDef, ResourceInfo, ResourceRegistry,
};
use keel_core::IdKind;
use keel_repository::RepositoryFactory;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Unknown parent type {parent} for {type_name}")]
    UnknownParentType { type_name: String, parent: String },

    #[error("Parent cycle detected involving type: {0}")]
    ParentCycle(String),

    #[error("Unknown target type {target} for relationship {relationship} on {type_name}")]
    UnknownRelationshipTarget {
        type_name: String,
        relationship: String,
        target: String,
    },

    #[error("No repository factory for type: {0}")]
    MissingRepository(String),
}

struct PendingResource {
    id_field: IdField,
    attributes: HashMap<String, FieldDef>,
    relationships: HashMap<String, RelationshipDef>,
    parent: Option<String>,
    repository: RepositoryFactory,
}

/// Builder for constructing an immutable ResourceRegistry.
#[derive(Default)]
pub struct RegistryBuilder {
    resources: HashMap<String, PendingResource>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource type definition.
    pub fn add_resource(&mut self, type_name: impl Into<String>) -> ResourceBuilder<'_> {
        ResourceBuilder {
            builder: self,
            type_name: type_name.into(),
            // Identifier fields default to a 64-bit integer named "id";
            // every type has exactly one.
            id_field: IdField {
                name: "id".to_string(),
                kind: IdKind::Long,
            },
            attributes: HashMap::new(),
            relationships: HashMap::new(),
            parent: None,
            repository: None,
        }
    }

    /// Build the immutable ResourceRegistry.
    pub fn build(self) -> Result<ResourceRegistry, RegistryError> {
        // Validate parent declarations
        for (type_name, pending) in &self.resources {
            if let Some(parent) = &pending.parent {
                if !self.resources.contains_key(parent) {
                    return Err(RegistryError::UnknownParentType {
                        type_name: type_name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            self.check_parent_chain(type_name)?;
        }

        // Validate relationship targets
        for (type_name, pending) in &self.resources {
            for rel in pending.relationships.values() {
                if !self.resources.contains_key(&rel.target_type) {
                    return Err(RegistryError::UnknownRelationshipTarget {
                        type_name: type_name.clone(),
                        relationship: rel.name.clone(),
                        target: rel.target_type.clone(),
                    });
                }
            }
        }

        let entries = self
            .resources
            .into_iter()
            .map(|(type_name, pending)| {
                let info = ResourceInfo::new(
                    type_name.clone(),
                    pending.id_field,
                    pending.attributes,
                    pending.relationships,
                    pending.parent,
                );
                (type_name, RegistryEntry::new(info, pending.repository))
            })
            .collect();

        Ok(ResourceRegistry::new(entries))
    }

    fn check_parent_chain(&self, type_name: &str) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        let mut current = Some(type_name);
        while let Some(name) = current {
            if !seen.insert(name) {
                return Err(RegistryError::ParentCycle(type_name.to_string()));
            }
            current = self
                .resources
                .get(name)
                .and_then(|pending| pending.parent.as_deref());
        }
        Ok(())
    }
}

/// Sub-builder for one resource type.
pub struct ResourceBuilder<'b> {
    builder: &'b mut RegistryBuilder,
    type_name: String,
    id_field: IdField,
    attributes: HashMap<String, FieldDef>,
    relationships: HashMap<String, RelationshipDef>,
    parent: Option<String>,
    repository: Option<RepositoryFactory>,
}

impl<'b> ResourceBuilder<'b> {
    /// Declare the identifier field (name and semantics).
    pub fn id_field(mut self, name: impl Into<String>, kind: IdKind) -> Self {
        self.id_field = IdField {
            name: name.into(),
            kind,
        };
        self
    }

    /// Declare an attribute field.
    pub fn attr(mut self, def: FieldDef) -> Self {
        self.attributes.insert(def.name.clone(), def);
        self
    }

    /// Declare a to-one relationship.
    pub fn to_one(mut self, name: impl Into<String>, target_type: impl Into<String>) -> Self {
        let def = RelationshipDef::new(name, target_type, Cardinality::ToOne);
        self.relationships.insert(def.name.clone(), def);
        self
    }

    /// Declare a to-many relationship.
    pub fn to_many(mut self, name: impl Into<String>, target_type: impl Into<String>) -> Self {
        let def = RelationshipDef::new(name, target_type, Cardinality::ToMany);
        self.relationships.insert(def.name.clone(), def);
        self
    }

    /// Declare a parent type (subtype polymorphism).
    pub fn parent(mut self, type_name: impl Into<String>) -> Self {
        self.parent = Some(type_name.into());
        self
    }

    /// Attach the repository factory for this type.
    pub fn repository(mut self, factory: RepositoryFactory) -> Self {
        self.repository = Some(factory);
        self
    }

    /// Finish this resource type and return to the builder.
    pub fn done(self) -> Result<(), RegistryError> {
        if self.builder.resources.contains_key(&self.type_name) {
            return Err(RegistryError::DuplicateTypeName(self.type_name));
        }
        let repository = self
            .repository
            .ok_or_else(|| RegistryError::MissingRepository(self.type_name.clone()))?;
        self.builder.resources.insert(
            self.type_name,
            PendingResource {
                id_field: self.id_field,
                attributes: self.attributes,
                relationships: self.relationships,
                parent: self.parent,
                repository,
            },
        );
        Ok(())
    }
}
