//! # gloss-schema
//!
//! JSON Schema registry and structural validation for gloss.
//!
//! This crate provides:
//! - `SchemaRegistry`: the named schemas for the input document, a single
//!   term, and the export document
//! - `validate_schema`: structural check of a raw input document that
//!   collects every violation before reporting
//!
//! ## Architecture
//!
//! Entity types are defined in `gloss-core` with `#[derive(JsonSchema)]` and
//! closed records. This crate turns them into schemas and runs `jsonschema`
//! over raw `serde_json::Value`s, so violations carry the JSON pointer of the
//! offending value.

mod error;
mod registry;

pub use error::{SchemaError, SchemaViolation};
pub use registry::{EXPORT_DOCUMENT, GLOSSARY_DOCUMENT, SchemaRegistry, TERM, validate_schema};
