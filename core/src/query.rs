//! Opaque query parameters.
//!
//! Parsed by an external layer and passed through to repositories; this
//! core never interprets them.

use std::collections::HashMap;

/// Request query parameters as an opaque string multimap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    /// All values recorded under a key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.params.get(key).map(Vec::as_slice)
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
