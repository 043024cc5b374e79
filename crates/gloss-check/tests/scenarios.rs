//! End-to-end validation scenarios over raw documents.

use gloss_check::{ValidationError, Violation, check_consistency, validate_document};
use gloss_core::{Snapshot, TermRecord};
use pretty_assertions::assert_eq;
use serde_json::json;

fn definition() -> String {
    "x".repeat(80)
}

#[test]
fn single_minimal_term_is_valid() {
    let raw = json!({
        "terms": [{ "slug": "foo-bar", "term": "Foo Bar", "definition": definition() }]
    });
    let snapshot = validate_document(&raw, None).unwrap();
    assert_eq!(snapshot.terms.len(), 1);
}

#[test]
fn shared_slug_names_slug_and_both_positions() {
    let raw = json!({
        "terms": [
            { "slug": "dup", "term": "First", "definition": definition() },
            { "slug": "dup", "term": "Second", "definition": definition() }
        ]
    });
    let err = validate_document(&raw, None).unwrap_err();
    let messages = err.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("'dup'"));
    assert!(messages[0].contains("terms[0]"));
    assert!(messages[0].contains("terms[1]"));
}

#[test]
fn case_only_name_difference_conflicts() {
    let raw = json!({
        "terms": [
            { "slug": "foss", "term": "FOSS", "definition": definition() },
            { "slug": "foss-lower", "term": "foss", "definition": definition() }
        ]
    });
    let Err(ValidationError::Consistency(err)) = validate_document(&raw, None) else {
        panic!("expected a consistency failure");
    };
    assert!(matches!(err.violations[0], Violation::DuplicateName { .. }));
    assert!(err.messages()[0].contains("conflicts with 'FOSS'"));
}

#[test]
fn renamed_slug_against_base_cites_both_slugs() {
    let base = Snapshot::new(vec![TermRecord::new("old", "Widget", definition())]);
    let raw = json!({ "terms": [{ "slug": "new", "term": "Widget", "definition": definition() }] });
    let err = validate_document(&raw, Some(&base)).unwrap_err();
    assert_eq!(
        err.messages(),
        vec!["slug for term 'Widget' changed from 'old' to 'new'".to_string()]
    );
}

#[test]
fn redirect_from_active_slug_conflicts() {
    let raw = json!({
        "terms": [
            { "slug": "a-a", "term": "A", "definition": definition() },
            { "slug": "b-b", "term": "B", "definition": definition() }
        ],
        "redirects": { "a-a": "b-b" }
    });
    let Err(ValidationError::Consistency(err)) = validate_document(&raw, None) else {
        panic!("expected a consistency failure");
    };
    assert_eq!(
        err.violations,
        vec![Violation::RedirectSourceActive {
            source: "a-a".into(),
            target: "b-b".into(),
        }]
    );
}

#[test]
fn redirect_source_matching_short_active_slug_conflicts() {
    let snapshot = Snapshot::new(vec![
        TermRecord::new("a", "A", definition()),
        TermRecord::new("b", "B", definition()),
    ])
    .with_redirects([("a".to_string(), "b".to_string())].into_iter().collect());
    let err = check_consistency(&snapshot, None).unwrap_err();
    assert_eq!(
        err.messages(),
        vec!["redirect 'a' -> 'b' conflicts with the active term slug 'a'".to_string()]
    );
}

#[test]
fn hundreds_of_terms_check_cleanly() {
    let terms: Vec<TermRecord> = (0..800)
        .map(|i| {
            let mut record =
                TermRecord::new(format!("term-{i}"), format!("Term {i}"), definition());
            record.aliases = Some(vec![format!("Alias {i}")]);
            record
        })
        .collect();
    let base = Snapshot::new(terms.clone());
    let snapshot = Snapshot::new(terms);
    assert_eq!(check_consistency(&snapshot, Some(&base)), Ok(()));
}
