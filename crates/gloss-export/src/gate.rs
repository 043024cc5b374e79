//! Export gating and raw-input decoding.

use std::collections::HashSet;

use gloss_core::Snapshot;

use crate::error::ExportError;

/// Whether `current` has a slug that `previous` lacks.
///
/// A pure set difference: removed slugs or edits to existing terms do not
/// count as new.
#[must_use]
pub fn has_new_slugs(current: &Snapshot, previous: &Snapshot) -> bool {
    let known: HashSet<&str> = previous.slugs().collect();
    current.slugs().any(|slug| !known.contains(slug))
}

/// Decode a raw `{ "terms": [...] }` value for export.
///
/// # Errors
///
/// Returns `ExportError::MalformedRoot` if the root is not an object with a
/// `terms` array, or if the records do not decode.
pub fn snapshot_from_value(raw: &serde_json::Value) -> Result<Snapshot, ExportError> {
    let root = raw
        .as_object()
        .ok_or_else(|| ExportError::MalformedRoot("root must be an object".to_string()))?;
    if !root.get("terms").is_some_and(serde_json::Value::is_array) {
        return Err(ExportError::MalformedRoot(
            "root must contain a 'terms' array".to_string(),
        ));
    }
    serde_json::from_value(raw.clone()).map_err(|e| ExportError::MalformedRoot(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::TermRecord;
    use serde_json::json;

    fn snapshot(slugs: &[&str]) -> Snapshot {
        Snapshot::new(
            slugs
                .iter()
                .map(|slug| TermRecord::new(*slug, *slug, "x".repeat(80)))
                .collect(),
        )
    }

    #[test]
    fn added_slug_is_new() {
        assert!(has_new_slugs(&snapshot(&["aaa", "bbb"]), &snapshot(&["aaa"])));
    }

    #[test]
    fn removal_is_not_new() {
        assert!(!has_new_slugs(&snapshot(&["aaa"]), &snapshot(&["aaa", "bbb"])));
    }

    #[test]
    fn edits_to_existing_slugs_are_not_new() {
        let previous = snapshot(&["aaa"]);
        let mut current = snapshot(&["aaa"]);
        current.terms[0].humor = Some("changed".into());
        assert!(!has_new_slugs(&current, &previous));
    }

    #[test]
    fn everything_is_new_against_empty_previous() {
        assert!(has_new_slugs(&snapshot(&["aaa"]), &Snapshot::default()));
        assert!(!has_new_slugs(&Snapshot::default(), &Snapshot::default()));
    }

    #[test]
    fn malformed_roots_are_rejected() {
        for raw in [json!([]), json!({}), json!({ "terms": {} }), json!("terms")] {
            assert!(matches!(
                snapshot_from_value(&raw),
                Err(ExportError::MalformedRoot(_))
            ));
        }
    }

    #[test]
    fn well_formed_root_decodes() {
        let raw = json!({ "terms": [{ "slug": "aaa", "term": "A", "definition": "d" }] });
        let snapshot = snapshot_from_value(&raw).unwrap();
        assert_eq!(snapshot.terms.len(), 1);
    }
}
