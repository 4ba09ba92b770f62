//! Keel Patch
//!
//! Execute partial-update (PATCH) requests against registered resources.
//!
//! Responsibilities:
//! - Validate the request structurally against the registry
//! - Fetch the target instance through its repository
//! - Merge only the supplied attributes and relationships
//! - Persist the merged instance and assemble the response envelope
//!
//! # Module Structure
//!
//! - `executor` - Main PatchExecutor that coordinates the pipeline
//! - `ops/` - Merge operation implementations (attributes, relationships)
//! - `validate` - Structural request validation
//! - `response` - Response envelope assembly
//! - `error` - Error types for pipeline failures

mod error;
mod executor;
mod ops;
mod response;
mod validate;

pub use error::{PatchError, PatchResult};
pub use executor::PatchExecutor;
pub use ops::{merge_attributes, merge_relationships};
pub use response::{assemble, Envelope};
pub use validate::{validate_request, ValidatedPatch};
