//! Name and term normalization.
//!
//! [`normalize_name`] produces the comparison key used for every duplicate and
//! slug-immutability check. [`normalize_term`] canonicalizes a record for
//! export: trimmed text, blank entries dropped, empty optionals omitted.

use unicode_normalization::UnicodeNormalization;

use crate::entities::TermRecord;
use crate::error::TermError;
use crate::slug::check_slug;

/// Minimum length of a trimmed definition, in characters.
pub const MIN_DEFINITION_LEN: usize = 80;

/// Comparison key for a display name or alias.
///
/// Steps, in this order:
/// 1. NFC composition, so `e` + U+0301 becomes `é`.
/// 2. Lowercasing.
/// 3. [`retain_ascii_key_chars`].
///
/// Composing before stripping means composed and decomposed spellings of the
/// same visual string always produce the same key.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    retain_ascii_key_chars(&composed.to_lowercase())
}

/// Keep only `[a-z0-9]`.
///
/// Accented letters are dropped outright, not folded to their base letter:
/// `"résumé"` keys as `"rsum"` while `"resume"` keys as `"resume"`.
#[must_use]
pub fn retain_ascii_key_chars(lowered: &str) -> String {
    lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// The trimmed value if it is present and non-blank.
#[must_use]
pub fn present_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// Canonicalize a term record.
///
/// Required fields are trimmed and must be non-blank. The slug must satisfy
/// the slug rules and the definition must be at least
/// [`MIN_DEFINITION_LEN`] characters after trimming. Optional text fields
/// that are blank are omitted; list entries are trimmed, blank entries are
/// dropped, and a list left empty is omitted.
///
/// # Errors
///
/// Returns the first violated constraint as a [`TermError`].
pub fn normalize_term(raw: &TermRecord) -> Result<TermRecord, TermError> {
    let slug = required(&raw.slug, "", "slug")?;
    let term = required(&raw.term, slug, "term")?;
    let definition = required(&raw.definition, slug, "definition")?;

    check_slug(slug).map_err(|issue| TermError::InvalidSlug {
        slug: slug.to_string(),
        issue,
    })?;

    let definition_len = definition.chars().count();
    if definition_len < MIN_DEFINITION_LEN {
        return Err(TermError::DefinitionTooShort {
            slug: slug.to_string(),
            len: definition_len,
            min: MIN_DEFINITION_LEN,
        });
    }

    Ok(TermRecord {
        slug: slug.to_string(),
        term: term.to_string(),
        definition: definition.to_string(),
        explanation: optional_text(raw.explanation.as_deref()),
        humor: optional_text(raw.humor.as_deref()),
        tags: optional_list(raw.tags.as_deref()),
        see_also: optional_list(raw.see_also.as_deref()),
        aliases: optional_list(raw.aliases.as_deref()),
        controversy_level: raw.controversy_level,
    })
}

fn required<'a>(value: &'a str, slug: &str, field: &'static str) -> Result<&'a str, TermError> {
    present_text(Some(value)).ok_or_else(|| TermError::MissingField {
        slug: slug.to_string(),
        field,
    })
}

fn optional_text(value: Option<&str>) -> Option<String> {
    present_text(value).map(str::to_string)
}

fn optional_list(values: Option<&[String]>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = values
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| present_text(Some(entry.as_str())))
        .map(str::to_string)
        .collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
