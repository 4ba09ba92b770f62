//! Resource instance structures.
//!
//! A `Resource` is the in-memory, typed domain object fetched from and
//! persisted through a repository. It is owned transiently by the patch
//! pipeline for the duration of one request and mutated in place by the
//! mergers; only supplied fields change.

use crate::{ResourceId, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Attribute values keyed by field name.
pub type Attributes = HashMap<String, Value>;

/// A resolved reference to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    /// Type name of the related resource.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Identifier of the related resource.
    pub id: ResourceId,
}

impl ResourceLink {
    pub fn new(type_name: impl Into<String>, id: ResourceId) -> Self {
        Self {
            type_name: type_name.into(),
            id,
        }
    }
}

/// The state of one relationship field on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Linkage {
    /// A to-one relationship; `None` when explicitly cleared.
    ToOne(Option<ResourceLink>),
    /// A to-many relationship; order is significant.
    ToMany(Vec<ResourceLink>),
}

/// A resource instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// Type name (reference to registry).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Identifier.
    pub id: ResourceId,
    /// Attribute values.
    pub attributes: Attributes,
    /// Relationship state keyed by relationship name.
    pub relationships: HashMap<String, Linkage>,
}

impl Resource {
    /// Create a new resource with empty attributes and relationships.
    pub fn new(type_name: impl Into<String>, id: ResourceId) -> Self {
        Self {
            type_name: type_name.into(),
            id,
            attributes: Attributes::new(),
            relationships: HashMap::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute value, overwriting any prior value.
    pub fn set_attr(&mut self, name: String, value: Value) {
        self.attributes.insert(name, value);
    }

    /// Get the state of a relationship by name.
    pub fn relationship(&self, name: &str) -> Option<&Linkage> {
        self.relationships.get(name)
    }

    /// Set the state of a relationship, replacing any prior linkage.
    pub fn set_relationship(&mut self, name: String, linkage: Linkage) {
        self.relationships.insert(name, linkage);
    }

    /// Builder-style attribute assignment, for construction sites.
    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Builder-style to-one relationship assignment.
    pub fn with_to_one(mut self, name: impl Into<String>, link: Option<ResourceLink>) -> Self {
        self.relationships.insert(name.into(), Linkage::ToOne(link));
        self
    }

    /// Builder-style to-many relationship assignment.
    pub fn with_to_many(mut self, name: impl Into<String>, links: Vec<ResourceLink>) -> Self {
        self.relationships.insert(name.into(), Linkage::ToMany(links));
        self
    }
}
