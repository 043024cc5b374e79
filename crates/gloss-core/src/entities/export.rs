use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TermRecord;

/// The versioned publication artifact.
///
/// Built fresh by every export call and never mutated afterwards.
/// `terms` are canonicalized and sorted ascending by slug, and `terms_count`
/// always equals `terms.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExportDocument {
    /// Build or VCS identifier supplied by the caller.
    #[schemars(schema_with = "crate::schema_fields::non_blank")]
    pub version: String,

    /// ISO 8601 timestamp supplied by the caller.
    #[schemars(schema_with = "crate::schema_fields::timestamp")]
    pub generated_at: String,

    pub terms_count: usize,

    pub terms: Vec<TermRecord>,
}
