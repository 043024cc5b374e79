//! Term-level error types.
//!
//! These are raised by [`crate::normalize::normalize_term`] and fail fast: the
//! first violated constraint is reported. Aggregating validation lives in
//! `gloss-schema` and `gloss-check`.

use thiserror::Error;

/// Why a slug was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlugIssue {
    #[error("is {len} characters, minimum is {min}")]
    TooShort { len: usize, min: usize },

    #[error("is {len} characters, maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// Not lowercase ASCII alphanumeric runs separated by single hyphens.
    #[error("does not match {pattern}", pattern = crate::slug::SLUG_PATTERN)]
    Pattern,
}

/// Errors from normalizing a single term record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// A required field is absent or blank after trimming.
    #[error("term '{slug}' is missing required field '{field}'")]
    MissingField { slug: String, field: &'static str },

    /// The slug violates the length bounds or the pattern.
    #[error("slug '{slug}' {issue}")]
    InvalidSlug { slug: String, issue: SlugIssue },

    /// The trimmed definition is shorter than the minimum.
    #[error("definition of '{slug}' is {len} characters, minimum is {min}")]
    DefinitionTooShort { slug: String, len: usize, min: usize },
}
