//! Central schema registry for gloss documents.
//!
//! The `SchemaRegistry` builds JSON Schemas from gloss-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`. Validation never stops at the first failure: every
//! violation is collected with the JSON pointer of the value it concerns.

use std::collections::HashMap;

use gloss_core::Snapshot;
use schemars::schema_for;
use tracing::debug;

use crate::error::{SchemaError, SchemaViolation};

/// Input document: `{ terms, redirects? }`.
pub const GLOSSARY_DOCUMENT: &str = "glossary_document";

/// A single term record.
pub const TERM: &str = "term";

/// Published artifact: `{ version, generated_at, terms_count, terms }`.
pub const EXPORT_DOCUMENT: &str = "export_document";

/// Store of every JSON Schema gloss validates against.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry containing the document, term and export schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema. `schemars` always produces JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, GLOSSARY_DOCUMENT, gloss_core::Snapshot);
        register!(schemas, TERM, gloss_core::TermRecord);
        register!(schemas, EXPORT_DOCUMENT, gloss_core::ExportDocument);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` carrying every violation found.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        let violations: Vec<SchemaViolation> = validator
            .iter_errors(instance)
            .map(|e| SchemaViolation {
                location: display_location(&e.instance_path.to_string()),
                message: format!("{e}"),
            })
            .collect();

        debug!(schema = name, violations = violations.len(), "validated");

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { violations })
        }
    }

    /// Validate a raw input document and decode it into a [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` with the complete violation
    /// list if the document is structurally invalid.
    pub fn validate_document(&self, raw: &serde_json::Value) -> Result<Snapshot, SchemaError> {
        self.validate(GLOSSARY_DOCUMENT, raw)?;

        serde_json::from_value(raw.clone()).map_err(|e| SchemaError::ValidationFailed {
            violations: vec![SchemaViolation {
                location: display_location(""),
                message: e.to_string(),
            }],
        })
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a raw input document against the glossary document schema.
///
/// # Errors
///
/// See [`SchemaRegistry::validate_document`].
pub fn validate_schema(raw: &serde_json::Value) -> Result<Snapshot, SchemaError> {
    SchemaRegistry::new().validate_document(raw)
}

fn display_location(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    fn definition() -> String {
        "d".repeat(80)
    }

    #[test]
    fn registry_has_expected_schemas() {
        let reg = registry();
        assert_eq!(reg.schema_count(), 3);
        assert_eq!(reg.list(), vec![EXPORT_DOCUMENT, GLOSSARY_DOCUMENT, TERM]);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn minimal_document_decodes() {
        let raw = json!({
            "terms": [{ "slug": "foo-bar", "term": "Foo Bar", "definition": definition() }]
        });
        let snapshot = registry().validate_document(&raw).unwrap();
        assert_eq!(snapshot.terms.len(), 1);
        assert_eq!(snapshot.terms[0].slug, "foo-bar");
        assert!(snapshot.redirects.is_empty());
    }

    #[test]
    fn non_object_root_is_reported_at_root() {
        let err = registry().validate_document(&json!([1, 2, 3])).unwrap_err();
        let violations = err.violations();
        assert!(!violations.is_empty());
        assert_eq!(violations[0].location, "/");
    }

    #[test]
    fn missing_terms_is_a_violation() {
        let err = registry().validate_document(&json!({})).unwrap_err();
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn unknown_top_level_key_is_a_violation() {
        let raw = json!({ "terms": [], "meta": {} });
        let err = registry().validate_document(&raw).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert!(err.violations()[0].message.contains("meta"));
    }

    #[test]
    fn messages_prefix_location() {
        let raw = json!({ "terms": [{ "slug": "x", "term": "X", "definition": definition() }] });
        let err = registry().validate_document(&raw).unwrap_err();
        let messages = err.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("/terms/0/slug: "), "{}", messages[0]);
    }
}
