//! Keel Registry
//!
//! The immutable resource type registry: maps type names to metadata and
//! repository accessors. Populated once at bootstrap through
//! `RegistryBuilder`, read-only during request handling.
//!
//! # Module Structure
//!
//! - `builder` - `RegistryBuilder` for validated construction
//! - `registry` - `ResourceRegistry` and `RegistryEntry` lookup
//! - `types` - Resource metadata definitions

mod builder;
mod registry;
mod types;

pub use builder::{RegistryBuilder, RegistryError, ResourceBuilder};
pub use registry::{RegistryEntry, ResourceRegistry};
pub use types::{Cardinality, FieldDef, IdField, RelationshipDef, ResourceInfo};
