//! Slug rules.
//!
//! A slug is one or more runs of `[a-z0-9]` joined by single hyphens, between
//! [`SLUG_MIN_LEN`] and [`SLUG_MAX_LEN`] characters long.

use crate::error::SlugIssue;

/// JSON Schema / ECMA pattern for a slug.
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

pub const SLUG_MIN_LEN: usize = 3;

pub const SLUG_MAX_LEN: usize = 48;

/// Check a slug against the length bounds and [`SLUG_PATTERN`].
///
/// Length is checked first so an overlong slug reports its length rather
/// than a pattern mismatch.
///
/// # Errors
///
/// Returns the first [`SlugIssue`] found.
pub fn check_slug(slug: &str) -> Result<(), SlugIssue> {
    let len = slug.chars().count();
    if len < SLUG_MIN_LEN {
        return Err(SlugIssue::TooShort {
            len,
            min: SLUG_MIN_LEN,
        });
    }
    if len > SLUG_MAX_LEN {
        return Err(SlugIssue::TooLong {
            len,
            max: SLUG_MAX_LEN,
        });
    }
    if matches_pattern(slug) {
        Ok(())
    } else {
        Err(SlugIssue::Pattern)
    }
}

fn matches_pattern(slug: &str) -> bool {
    slug.split('-').all(|run| {
        !run.is_empty()
            && run
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}
