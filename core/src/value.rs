//! Value types for keel attributes.
//!
//! Values are the typed data stored in resource attributes. Raw attribute
//! payloads arrive as `serde_json::Value` and are coerced to a `Value`
//! according to the `FieldKind` declared in resource metadata.

use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;

/// A value that can be stored in a resource attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Timestamp as milliseconds since Unix epoch.
    Timestamp(i64),
    /// List of values.
    List(Vec<Value>),
}

/// Semantic type of an attribute field, declared in resource metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string.
    String,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// Timestamp as milliseconds since Unix epoch.
    Timestamp,
    /// List of scalar values.
    List,
}

impl FieldKind {
    /// Human-readable kind name, used in error context.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "String",
            FieldKind::Int => "Int",
            FieldKind::Float => "Float",
            FieldKind::Bool => "Bool",
            FieldKind::Timestamp => "Timestamp",
            FieldKind::List => "List",
        }
    }

    /// Coerce a raw JSON payload value to this kind.
    ///
    /// JSON null coerces to `Value::Null` for any kind; integers are
    /// accepted where a float is declared.
    pub fn coerce(self, raw: &Json) -> Result<Value, CoerceError> {
        match (self, raw) {
            (_, Json::Null) => Ok(Value::Null),
            (FieldKind::String, Json::String(s)) => Ok(Value::String(s.clone())),
            (FieldKind::Bool, Json::Bool(b)) => Ok(Value::Bool(*b)),
            (FieldKind::Int, Json::Number(n)) => n
                .as_i64()
                .map(Value::Int)
                .ok_or_else(|| CoerceError::new(self, raw)),
            (FieldKind::Float, Json::Number(n)) => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| CoerceError::new(self, raw)),
            (FieldKind::Timestamp, Json::Number(n)) => n
                .as_i64()
                .map(Value::Timestamp)
                .ok_or_else(|| CoerceError::new(self, raw)),
            (FieldKind::List, Json::Array(items)) => items
                .iter()
                .map(|item| json_to_value(self, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            _ => Err(CoerceError::new(self, raw)),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a raw payload value does not fit the declared field kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct CoerceError {
    /// Declared kind name.
    pub expected: &'static str,
    /// JSON type name of the supplied value.
    pub actual: &'static str,
}

impl CoerceError {
    fn new(kind: FieldKind, raw: &Json) -> Self {
        Self {
            expected: kind.name(),
            actual: json_type_name(raw),
        }
    }
}

/// Convert an arbitrary JSON scalar or array to a `Value`.
/// Objects have no `Value` representation and fail with the list kind.
fn json_to_value(kind: FieldKind, raw: &Json) -> Result<Value, CoerceError> {
    match raw {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| CoerceError::new(kind, raw))
            }
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .map(|item| json_to_value(kind, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Object(_) => Err(CoerceError::new(kind, raw)),
    }
}

fn json_type_name(raw: &Json) -> &'static str {
    match raw {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
