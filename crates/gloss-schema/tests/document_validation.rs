//! Aggregated schema validation over realistic glossary documents.

use gloss_schema::{SchemaError, SchemaRegistry, TERM, validate_schema};
use pretty_assertions::assert_eq;
use serde_json::json;

fn definition() -> String {
    "A reasonably detailed definition that comfortably clears the eighty character minimum.".into()
}

#[test]
fn reports_every_violation_not_just_the_first() {
    let raw = json!({
        "terms": [
            { "slug": "ok-term", "term": "Ok", "definition": definition() },
            { "slug": "Bad Slug", "term": "Bad", "definition": definition() },
            { "slug": "short-def", "term": "Short", "definition": "too short" },
            { "slug": "extra-key", "term": "Extra", "definition": definition(), "author": "me" },
            { "slug": "spicy", "term": "Spicy", "definition": definition(), "controversy_level": "nuclear" }
        ]
    });

    let err = validate_schema(&raw).unwrap_err();
    let SchemaError::ValidationFailed { violations } = &err else {
        panic!("expected ValidationFailed, got {err:?}");
    };

    let mut locations: Vec<&str> = violations.iter().map(|v| v.location.as_str()).collect();
    locations.sort_unstable();
    assert_eq!(
        locations,
        vec![
            "/terms/1/slug",
            "/terms/2/definition",
            "/terms/3",
            "/terms/4/controversy_level",
        ]
    );
}

#[test]
fn optional_fields_are_type_checked() {
    let raw = json!({
        "terms": [{
            "slug": "typed",
            "term": "Typed",
            "definition": definition(),
            "tags": "not-a-list",
            "see_also": [1, 2],
            "humor": 42
        }]
    });

    let err = validate_schema(&raw).unwrap_err();
    let locations: Vec<&str> = err.violations().iter().map(|v| v.location.as_str()).collect();
    assert!(locations.contains(&"/terms/0/tags"));
    assert!(locations.contains(&"/terms/0/see_also/0"));
    assert!(locations.contains(&"/terms/0/see_also/1"));
    assert!(locations.contains(&"/terms/0/humor"));
}

#[test]
fn redirects_must_map_to_strings() {
    let raw = json!({
        "terms": [{ "slug": "new-name", "term": "Thing", "definition": definition() }],
        "redirects": { "old-name": 7 }
    });
    let err = validate_schema(&raw).unwrap_err();
    assert_eq!(err.violations()[0].location, "/redirects/old-name");
}

#[test]
fn full_document_with_redirects_is_valid() {
    let raw = json!({
        "terms": [{
            "slug": "new-name",
            "term": "Thing",
            "definition": definition(),
            "explanation": "An explanation.",
            "humor": "A joke.",
            "tags": ["a", "b"],
            "see_also": ["other"],
            "aliases": ["Thingy"],
            "controversy_level": "high"
        }],
        "redirects": { "old-name": "new-name" }
    });
    let snapshot = validate_schema(&raw).unwrap();
    assert_eq!(snapshot.redirects.get("old-name").map(String::as_str), Some("new-name"));
}

#[test]
fn term_schema_validates_single_records() {
    let registry = SchemaRegistry::new();
    let ok = json!({ "slug": "foo-bar", "term": "Foo Bar", "definition": "x".repeat(80) });
    assert!(registry.validate(TERM, &ok).is_ok());

    let blank = json!({ "slug": "foo-bar", "term": " ", "definition": "x".repeat(80) });
    assert!(registry.validate(TERM, &blank).is_err());
}
