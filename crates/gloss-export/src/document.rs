//! Assembly of the export document.

use chrono::{DateTime, SecondsFormat, Utc};
use gloss_core::{ExportDocument, Snapshot, TermRecord, normalize_term};
use gloss_schema::{EXPORT_DOCUMENT, SchemaRegistry};

use crate::error::ExportError;
use crate::options::ExportMeta;

/// RFC 3339 UTC with millisecond precision, e.g. `2026-10-16T09:30:00.000Z`.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Canonicalize, sort and assemble the export document, then check it
/// against the export schema.
///
/// # Errors
///
/// Fails on the first term that cannot be canonicalized, on a schema
/// violation in the assembled document, or on a count mismatch.
pub fn build_document(
    registry: &SchemaRegistry,
    snapshot: &Snapshot,
    meta: &ExportMeta,
) -> Result<ExportDocument, ExportError> {
    let mut terms = snapshot
        .terms
        .iter()
        .map(normalize_term)
        .collect::<Result<Vec<TermRecord>, _>>()?;
    terms.sort_by(|a, b| a.slug.cmp(&b.slug));

    let document = ExportDocument {
        version: meta.version.trim().to_string(),
        generated_at: format_timestamp(&meta.generated_at),
        terms_count: terms.len(),
        terms,
    };

    check_document(registry, &document)?;
    Ok(document)
}

fn check_document(registry: &SchemaRegistry, document: &ExportDocument) -> Result<(), ExportError> {
    if document.terms_count != document.terms.len() {
        return Err(ExportError::CountMismatch {
            terms_count: document.terms_count,
            actual: document.terms.len(),
        });
    }
    let value = serde_json::to_value(document)?;
    registry
        .validate(EXPORT_DOCUMENT, &value)
        .map_err(ExportError::Schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn meta() -> ExportMeta {
        ExportMeta::new("abc1234", Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap())
    }

    fn term(slug: &str) -> TermRecord {
        TermRecord::new(slug, slug.to_uppercase(), "x".repeat(80))
    }

    #[test]
    fn timestamp_uses_millis_and_z() {
        assert_eq!(format_timestamp(&meta().generated_at), "2026-10-16T09:30:00.000Z");
    }

    #[test]
    fn terms_are_sorted_and_counted() {
        let snapshot = Snapshot::new(vec![term("zeta"), term("alpha"), term("mid-way")]);
        let doc = build_document(&SchemaRegistry::new(), &snapshot, &meta()).unwrap();
        let slugs: Vec<&str> = doc.terms.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "mid-way", "zeta"]);
        assert_eq!(doc.terms_count, 3);
        assert_eq!(doc.version, "abc1234");
    }

    #[test]
    fn first_bad_term_aborts() {
        let mut bad = term("bad-one");
        bad.definition = "short".into();
        let snapshot = Snapshot::new(vec![term("good"), bad]);
        let err = build_document(&SchemaRegistry::new(), &snapshot, &meta()).unwrap_err();
        assert!(matches!(err, ExportError::Term(_)));
    }

    #[test]
    fn blank_version_fails_export_schema() {
        let snapshot = Snapshot::new(vec![term("good")]);
        let meta = ExportMeta::new("  ", meta().generated_at);
        let err = build_document(&SchemaRegistry::new(), &snapshot, &meta).unwrap_err();
        assert!(matches!(err, ExportError::Schema(_)));
    }

    #[test]
    fn empty_snapshot_exports_zero_terms() {
        let doc = build_document(&SchemaRegistry::new(), &Snapshot::default(), &meta()).unwrap();
        assert_eq!(doc.terms_count, 0);
        assert!(doc.terms.is_empty());
    }
}
