//! Resource metadata definitions.

use keel_core::{FieldKind, IdKind};
use std::collections::HashMap;
use std::fmt;

/// Attribute field definition within a resource type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Semantic type of the field.
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ToOne,
    ToMany,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinality::ToOne => "to-one",
            Cardinality::ToMany => "to-many",
        })
    }
}

/// Relationship field definition within a resource type.
#[derive(Debug, Clone)]
pub struct RelationshipDef {
    /// Relationship name.
    pub name: String,
    /// Target resource type name.
    pub target_type: String,
    /// To-one or to-many.
    pub cardinality: Cardinality,
}

impl RelationshipDef {
    pub fn new(
        name: impl Into<String>,
        target_type: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            cardinality,
        }
    }
}

/// The identifier field of a resource type. Every type has exactly one.
#[derive(Debug, Clone)]
pub struct IdField {
    /// Field name.
    pub name: String,
    /// Identifier semantics.
    pub kind: IdKind,
}

/// Metadata for one registered resource type.
#[derive(Debug, Clone)]
pub struct ResourceInfo {
    type_name: String,
    id_field: IdField,
    attributes: HashMap<String, FieldDef>,
    relationships: HashMap<String, RelationshipDef>,
    parent: Option<String>,
}

impl ResourceInfo {
    pub(crate) fn new(
        type_name: String,
        id_field: IdField,
        attributes: HashMap<String, FieldDef>,
        relationships: HashMap<String, RelationshipDef>,
        parent: Option<String>,
    ) -> Self {
        Self {
            type_name,
            id_field,
            attributes,
            relationships,
            parent,
        }
    }

    /// The resource type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The identifier field.
    pub fn id_field(&self) -> &IdField {
        &self.id_field
    }

    /// An attribute declared directly on this type.
    pub fn attribute(&self, name: &str) -> Option<&FieldDef> {
        self.attributes.get(name)
    }

    /// A relationship declared directly on this type.
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships.get(name)
    }

    /// All attributes declared directly on this type.
    pub fn attributes(&self) -> impl Iterator<Item = &FieldDef> {
        self.attributes.values()
    }

    /// All relationships declared directly on this type.
    pub fn relationships(&self) -> impl Iterator<Item = &RelationshipDef> {
        self.relationships.values()
    }

    /// Parent type name, when this type is a declared subtype.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}
