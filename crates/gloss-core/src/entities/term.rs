use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::ControversyLevel;

/// One glossary entry.
///
/// `slug`, `term` and `definition` are required. Every other field may be
/// absent; when present in a canonicalized record it is non-blank.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TermRecord {
    #[schemars(schema_with = "crate::schema_fields::slug")]
    pub slug: String,

    /// Display name.
    #[schemars(schema_with = "crate::schema_fields::non_blank")]
    pub term: String,

    #[schemars(schema_with = "crate::schema_fields::definition")]
    pub definition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema_fields::non_blank")]
    pub explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema_fields::non_blank")]
    pub humor: Option<String>,

    #[serde(
        default,
        deserialize_with = "label_list",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "crate::schema_fields::label_list")]
    pub tags: Option<Vec<String>>,

    /// Slugs of related terms.
    #[serde(
        default,
        deserialize_with = "label_list",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "crate::schema_fields::label_list")]
    pub see_also: Option<Vec<String>>,

    /// Alternative display names. Checked for collisions like `term`.
    #[serde(
        default,
        deserialize_with = "label_list",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "crate::schema_fields::label_list")]
    pub aliases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::schema_fields::controversy_level")]
    pub controversy_level: Option<ControversyLevel>,
}

impl TermRecord {
    /// Record with only the required fields set.
    #[must_use]
    pub fn new(
        slug: impl Into<String>,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            term: term.into(),
            definition: definition.into(),
            explanation: None,
            humor: None,
            tags: None,
            see_also: None,
            aliases: None,
            controversy_level: None,
        }
    }

    /// The display name followed by every alias, in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.term.as_str())
            .chain(self.aliases.iter().flatten().map(String::as_str))
    }
}

/// Decode a label list, dropping `null` entries.
fn label_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries.map(|entries| entries.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_optionals_are_not_serialized() {
        let record = TermRecord::new("foo-bar", "Foo Bar", "x".repeat(80));
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"slug"));
        assert!(keys.contains(&"term"));
        assert!(keys.contains(&"definition"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = serde_json::json!({
            "slug": "foo-bar",
            "term": "Foo Bar",
            "definition": "x".repeat(80),
            "author": "someone",
        });
        assert!(serde_json::from_value::<TermRecord>(json).is_err());
    }

    #[test]
    fn labels_include_aliases_in_order() {
        let mut record = TermRecord::new("foss", "FOSS", "x".repeat(80));
        record.aliases = Some(vec!["Free Software".into(), "Open Source".into()]);
        let labels: Vec<&str> = record.labels().collect();
        assert_eq!(labels, vec!["FOSS", "Free Software", "Open Source"]);
    }

    #[test]
    fn null_list_entries_are_dropped_on_decode() {
        let json = serde_json::json!({
            "slug": "foo-bar",
            "term": "Foo Bar",
            "definition": "x".repeat(80),
            "tags": ["ok", null, "  "],
            "aliases": [null],
        });
        let record: TermRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.tags, Some(vec!["ok".to_string(), "  ".to_string()]));
        assert_eq!(record.aliases, Some(Vec::new()));
        assert_eq!(record.see_also, None);
    }
}
