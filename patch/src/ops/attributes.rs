//! Attribute merge - applies supplied attribute values to the target.

use crate::error::{PatchError, PatchResult};
use keel_core::{DataElement, Resource};
use keel_registry::{ResourceInfo, ResourceRegistry};
use tracing::debug;

/// Merge supplied attribute values onto the target instance.
///
/// For each supplied attribute the declared field kind (including fields
/// inherited from parent types) decides the coercion; the coerced value
/// overwrites any prior value. Attributes absent from the supplied map
/// are left untouched.
///
/// Undeclared attribute names are skipped rather than rejected, so
/// payloads from newer clients keep working against older registries.
pub fn merge_attributes(
    registry: &ResourceRegistry,
    info: &ResourceInfo,
    data: &DataElement,
    target: &mut Resource,
) -> PatchResult<()> {
    for (name, raw) in &data.attributes {
        let Some(field) = registry.attribute_of(info.type_name(), name) else {
            debug!(
                attribute = name.as_str(),
                type_name = info.type_name(),
                "skipping undeclared attribute"
            );
            continue;
        };

        let value = field
            .kind
            .coerce(raw)
            .map_err(|e| PatchError::attribute_type(name, e.expected, e.actual))?;

        target.set_attr(name.clone(), value);
    }

    Ok(())
}
