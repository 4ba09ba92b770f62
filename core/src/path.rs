//! Parsed request path and HTTP method tags.
//!
//! The routing layer produces a `ResourcePath` before the pipeline runs;
//! this core only reads it.

use std::fmt;

/// HTTP method tag, used to name the operation in error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed representation of the request path: resource type name, raw
/// identifier strings and the collection/single addressing flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    type_name: String,
    ids: Vec<String>,
    collection: bool,
}

impl ResourcePath {
    /// A path addressing a single resource by one identifier.
    pub fn single(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ids: vec![id.into()],
            collection: false,
        }
    }

    /// A path addressing a whole collection.
    pub fn collection(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ids: Vec::new(),
            collection: true,
        }
    }

    /// A path with arbitrary shape, as produced by the routing layer.
    pub fn new(type_name: impl Into<String>, ids: Vec<String>, collection: bool) -> Self {
        Self {
            type_name: type_name.into(),
            ids,
            collection,
        }
    }

    /// The addressed resource type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The raw path identifiers.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether the path addresses a collection.
    pub fn is_collection(&self) -> bool {
        self.collection
    }

    /// The sole identifier, when the path addresses exactly one resource.
    pub fn single_id(&self) -> Option<&str> {
        if !self.collection && self.ids.len() == 1 {
            self.ids.first().map(String::as_str)
        } else {
            None
        }
    }
}
