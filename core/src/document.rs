//! Request body structures.
//!
//! A `Document` is the already-deserialized mutation payload handed over by
//! the external codec layer: a `data` section holding either a single data
//! element or a collection of them, never both ambiguously. Attribute
//! values stay raw (`serde_json::Value`) until merge time, when resource
//! metadata decides their semantic type.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::HashMap;

/// The deserialized request payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Primary data section; absent or null when the body carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrimaryData>,
}

impl Document {
    /// Wrap a single data element.
    pub fn single(element: DataElement) -> Self {
        Self {
            data: Some(PrimaryData::Single(element)),
        }
    }

    /// Wrap a collection of data elements.
    pub fn collection(elements: Vec<DataElement>) -> Self {
        Self {
            data: Some(PrimaryData::Collection(elements)),
        }
    }

    /// Whether the data section is a collection.
    pub fn is_multiple(&self) -> bool {
        matches!(self.data, Some(PrimaryData::Collection(_)))
    }

    /// The single data element, if the data section holds exactly one.
    pub fn single_data(&self) -> Option<&DataElement> {
        match &self.data {
            Some(PrimaryData::Single(element)) => Some(element),
            _ => None,
        }
    }
}

/// Primary data: one element or an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A single data element.
    Single(DataElement),
    /// A collection of data elements.
    Collection(Vec<DataElement>),
}

/// One payload unit: declared type, optional identifier, raw attribute
/// values and relationship references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataElement {
    /// Declared resource type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Optional identifier string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw attribute values keyed by field name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Json>,
    /// Relationship references keyed by relationship name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub relationships: HashMap<String, RelationshipData>,
}

impl DataElement {
    /// Create an element with the given declared type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: None,
            attributes: HashMap::new(),
            relationships: HashMap::new(),
        }
    }

    /// Builder-style identifier assignment.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style raw attribute assignment.
    pub fn with_attribute(mut self, name: impl Into<String>, raw: Json) -> Self {
        self.attributes.insert(name.into(), raw);
        self
    }

    /// Builder-style to-one relationship reference.
    pub fn with_to_one(mut self, name: impl Into<String>, reference: Option<ResourceRef>) -> Self {
        self.relationships.insert(
            name.into(),
            RelationshipData {
                data: RelationshipLinkage::ToOne(reference),
            },
        );
        self
    }

    /// Builder-style to-many relationship references.
    pub fn with_to_many(mut self, name: impl Into<String>, references: Vec<ResourceRef>) -> Self {
        self.relationships.insert(
            name.into(),
            RelationshipData {
                data: RelationshipLinkage::ToMany(references),
            },
        );
        self
    }
}

/// One supplied relationship: a `data` section holding its linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipData {
    /// The supplied linkage.
    pub data: RelationshipLinkage,
}

/// Supplied relationship linkage: one optional reference or an ordered
/// sequence of references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipLinkage {
    /// To-one linkage; `None` means explicit null (clear the relationship).
    ToOne(Option<ResourceRef>),
    /// To-many linkage; order is significant.
    ToMany(Vec<ResourceRef>),
}

/// A raw reference to a resource: type name plus unparsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Referenced resource type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Unparsed identifier string.
    pub id: String,
}

impl ResourceRef {
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }
}
