//! Typed resource identifiers.
//!
//! Every resource type declares the semantic type of its identifier field
//! (`IdKind`). Path and relationship identifiers arrive as raw strings and
//! are parsed into a `ResourceId` according to the declared kind.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifier semantics declared by resource metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Opaque string.
    Str,
    /// RFC 4122 UUID.
    Uuid,
}

impl IdKind {
    /// Human-readable kind name, used in error context.
    pub fn name(self) -> &'static str {
        match self {
            IdKind::Int => "Int",
            IdKind::Long => "Long",
            IdKind::Str => "Str",
            IdKind::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed, strongly typed resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// 32-bit integer identifier.
    Int(i32),
    /// 64-bit integer identifier.
    Long(i64),
    /// String identifier.
    Str(String),
    /// UUID identifier.
    Uuid(Uuid),
}

impl ResourceId {
    /// Parse a raw path- or payload-supplied identifier string according
    /// to the declared identifier semantics.
    pub fn parse(raw: &str, kind: IdKind) -> Result<Self, IdParseError> {
        match kind {
            IdKind::Int => raw
                .parse::<i32>()
                .map(ResourceId::Int)
                .map_err(|_| IdParseError::new(raw, kind)),
            IdKind::Long => raw
                .parse::<i64>()
                .map(ResourceId::Long)
                .map_err(|_| IdParseError::new(raw, kind)),
            IdKind::Str => Ok(ResourceId::Str(raw.to_string())),
            IdKind::Uuid => Uuid::parse_str(raw)
                .map(ResourceId::Uuid)
                .map_err(|_| IdParseError::new(raw, kind)),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(i) => write!(f, "{i}"),
            ResourceId::Long(l) => write!(f, "{l}"),
            ResourceId::Str(s) => f.write_str(s),
            ResourceId::Uuid(u) => write!(f, "{u}"),
        }
    }
}

// JSON:API ids are strings on the wire regardless of their semantic type.
impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raised when an identifier string cannot be converted to the semantics
/// declared by the target resource type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse identifier {raw:?} as {kind}")]
pub struct IdParseError {
    /// The offending identifier string.
    pub raw: String,
    /// The declared identifier semantics.
    pub kind: IdKind,
}

impl IdParseError {
    pub fn new(raw: impl Into<String>, kind: IdKind) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }
}
