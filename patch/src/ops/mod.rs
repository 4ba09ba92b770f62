//! Merge operation implementations.
//!
//! Each merge concern (attributes, relationships) is implemented in its
//! own module. Both apply partial-update semantics: fields absent from
//! the supplied maps are never touched.

mod attributes;
mod relationships;

pub use attributes::merge_attributes;
pub use relationships::merge_relationships;
