use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TermRecord;

/// One point-in-time state of the glossary: the input being validated, or a
/// previously published base used for slug-immutability checks.
///
/// The serialized shape is the input document: `{ terms, redirects? }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub terms: Vec<TermRecord>,

    /// Retired slug -> slug now serving that concept.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    #[schemars(schema_with = "crate::schema_fields::redirects")]
    pub redirects: BTreeMap<String, String>,
}

/// A single retired-slug mapping borrowed from a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

impl Snapshot {
    #[must_use]
    pub const fn new(terms: Vec<TermRecord>) -> Self {
        Self {
            terms,
            redirects: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_redirects(mut self, redirects: BTreeMap<String, String>) -> Self {
        self.redirects = redirects;
        self
    }

    /// Redirects ordered by source slug.
    pub fn redirect_pairs(&self) -> impl Iterator<Item = Redirect<'_>> {
        self.redirects.iter().map(|(source, target)| Redirect {
            source: source.as_str(),
            target: target.as_str(),
        })
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|term| term.slug.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn redirects_default_to_empty() {
        let json = serde_json::json!({ "terms": [] });
        let snapshot: Snapshot = serde_json::from_value(json).unwrap();
        assert!(snapshot.redirects.is_empty());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn redirect_pairs_are_sorted_by_source() {
        let redirects = BTreeMap::from([
            ("zeta".to_string(), "omega".to_string()),
            ("alpha".to_string(), "beta".to_string()),
        ]);
        let snapshot = Snapshot::default().with_redirects(redirects);
        let sources: Vec<&str> = snapshot.redirect_pairs().map(|r| r.source).collect();
        assert_eq!(sources, vec!["alpha", "zeta"]);
    }
}
