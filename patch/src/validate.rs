//! Structural request validation.
//!
//! All checks run, in order, before the pipeline performs any fetch or
//! mutation. Pure: no side effects, no repository calls.

use crate::error::{PatchError, PatchResult};
use keel_core::{DataElement, Document, Method, ResourcePath};
use keel_registry::{RegistryEntry, ResourceRegistry};

/// Outcome of validation: the resolved entries and the single data
/// element, everything the executor needs to proceed.
#[derive(Debug)]
pub struct ValidatedPatch<'a> {
    /// Entry for the path-addressed type; its repository performs the
    /// fetch and save.
    pub path_entry: &'a RegistryEntry,
    /// Entry for the body-declared type; its metadata drives the merge
    /// and the identifier semantics.
    pub body_entry: &'a RegistryEntry,
    /// The single supplied data element.
    pub data: &'a DataElement,
}

/// Verify that a partial-update request is structurally sound, in order:
///
/// 1. The path-addressed type is registered.
/// 2. A body was supplied.
/// 3. The body holds a single data element, not a collection.
/// 4. The data element is present and non-null.
/// 5. The body-declared type is registered and compatible with the
///    path-addressed type.
pub fn validate_request<'a>(
    registry: &'a ResourceRegistry,
    path: &ResourcePath,
    body: Option<&'a Document>,
) -> PatchResult<ValidatedPatch<'a>> {
    let path_type = path.type_name();

    let path_entry = registry
        .entry(path_type)
        .ok_or_else(|| PatchError::resource_type_not_found(path_type))?;

    let document = body.ok_or_else(|| PatchError::body_missing(Method::Patch, path_type))?;

    if document.is_multiple() {
        return Err(PatchError::body_invalid(
            Method::Patch,
            path_type,
            "multiple data in body",
        ));
    }

    let data = document.single_data().ok_or_else(|| {
        PatchError::body_invalid(Method::Patch, path_type, "no data field in the body")
    })?;

    let body_entry = registry
        .entry(&data.type_name)
        .ok_or_else(|| PatchError::resource_type_not_found(&data.type_name))?;

    if !registry.is_compatible(&data.type_name, path_type) {
        return Err(PatchError::type_mismatch(path_type, &data.type_name));
    }

    Ok(ValidatedPatch {
        path_entry,
        body_entry,
        data,
    })
}
