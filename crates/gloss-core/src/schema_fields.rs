//! Field-level JSON Schemas referenced from `#[schemars(schema_with = ...)]`.
//!
//! The derived schemas for [`crate::TermRecord`], [`crate::Snapshot`] and
//! [`crate::ExportDocument`] are closed records. Optional fields use these
//! helpers so their schema is the bare value type: `null` is never accepted
//! where a field is merely allowed to be absent.

use schemars::{Schema, SchemaGenerator, json_schema};

use crate::normalize::MIN_DEFINITION_LEN;
use crate::slug::{SLUG_MAX_LEN, SLUG_MIN_LEN, SLUG_PATTERN};

/// At least one non-whitespace character.
pub const NON_BLANK_PATTERN: &str = r"\S";

pub fn slug(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "pattern": SLUG_PATTERN,
        "minLength": SLUG_MIN_LEN,
        "maxLength": SLUG_MAX_LEN,
    })
}

pub fn non_blank(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "pattern": NON_BLANK_PATTERN,
    })
}

pub fn definition(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "pattern": NON_BLANK_PATTERN,
        "minLength": MIN_DEFINITION_LEN,
    })
}

/// Ordered list of non-blank strings (`tags`, `see_also`, `aliases`).
pub fn label_list(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "array",
        "items": {
            "type": "string",
            "pattern": NON_BLANK_PATTERN,
        },
    })
}

pub fn controversy_level(_generator: &mut SchemaGenerator) -> Schema {
    let values: Vec<&str> = crate::ControversyLevel::ALL
        .iter()
        .map(|level| level.as_str())
        .collect();
    json_schema!({
        "type": "string",
        "enum": values,
    })
}

/// `old-slug -> current-slug` mapping.
pub fn redirects(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "additionalProperties": {
            "type": "string",
            "pattern": NON_BLANK_PATTERN,
        },
    })
}

pub fn timestamp(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "format": "date-time",
        "pattern": NON_BLANK_PATTERN,
    })
}
