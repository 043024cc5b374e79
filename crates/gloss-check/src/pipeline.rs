//! Schema validation followed by the consistency check.

use gloss_core::Snapshot;
use gloss_schema::SchemaRegistry;

use crate::consistency::check_consistency;
use crate::error::ValidationError;

/// Validate a raw input document end to end.
///
/// A structurally invalid document cannot be checked for consistency, so
/// schema violations are returned without running the consistency pass.
///
/// # Errors
///
/// Returns `ValidationError::Schema` or `ValidationError::Consistency`, each
/// carrying the complete violation list of its phase.
pub fn validate_document(
    raw: &serde_json::Value,
    base: Option<&Snapshot>,
) -> Result<Snapshot, ValidationError> {
    validate_document_with(&SchemaRegistry::new(), raw, base)
}

/// [`validate_document`] with a caller-owned registry.
///
/// # Errors
///
/// See [`validate_document`].
pub fn validate_document_with(
    registry: &SchemaRegistry,
    raw: &serde_json::Value,
    base: Option<&Snapshot>,
) -> Result<Snapshot, ValidationError> {
    let snapshot = registry.validate_document(raw)?;
    check_consistency(&snapshot, base)?;
    Ok(snapshot)
}
