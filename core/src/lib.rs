//! Keel Core Types
//!
//! This crate provides the foundational types used throughout the keel system:
//! - Typed attribute values (`Value`, `FieldKind`)
//! - Typed resource identifiers (`ResourceId`, `IdKind`)
//! - The dynamic resource instance (`Resource`, `Linkage`, `ResourceLink`)
//! - The deserialized request body (`Document`, `DataElement`, ...)
//! - The parsed request path (`ResourcePath`, `Method`)
//! - Opaque query parameters (`QueryParams`)

mod document;
mod id;
mod path;
mod query;
mod resource;
mod value;

pub use document::*;
pub use id::*;
pub use path::*;
pub use query::*;
pub use resource::*;
pub use value::*;
