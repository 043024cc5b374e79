//! Typed consistency violations.

use std::fmt;

use serde::Serialize;

/// One consistency problem. `Display` yields a message a contributor can act
/// on without re-running the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A slug is claimed by more than one term.
    DuplicateSlug {
        slug: String,
        position: usize,
        first_position: usize,
    },

    /// Two different terms share a normalized display name or alias.
    DuplicateName {
        label: String,
        position: usize,
        existing_label: String,
        existing_position: usize,
        key: String,
    },

    /// A concept published under one slug now appears under another.
    SlugChanged {
        label: String,
        base_slug: String,
        slug: String,
    },

    /// A redirect source is still an active slug.
    RedirectSourceActive { source: String, target: String },

    /// A redirect target is not an active slug.
    RedirectTargetMissing { source: String, target: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlug {
                slug,
                position,
                first_position,
            } => write!(
                f,
                "duplicate slug '{slug}' at terms[{position}] (already used by terms[{first_position}])"
            ),
            Self::DuplicateName {
                label,
                position,
                existing_label,
                existing_position,
                key,
            } => write!(
                f,
                "name '{label}' at terms[{position}] conflicts with '{existing_label}' at terms[{existing_position}] (both normalize to '{key}')"
            ),
            Self::SlugChanged {
                label,
                base_slug,
                slug,
            } => write!(
                f,
                "slug for term '{label}' changed from '{base_slug}' to '{slug}'"
            ),
            Self::RedirectSourceActive { source, target } => write!(
                f,
                "redirect '{source}' -> '{target}' conflicts with the active term slug '{source}'"
            ),
            Self::RedirectTargetMissing { source, target } => write!(
                f,
                "redirect '{source}' -> '{target}' points at '{target}', which is not an active term slug"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slug_changed_message() {
        let v = Violation::SlugChanged {
            label: "Widget".into(),
            base_slug: "old".into(),
            slug: "new".into(),
        };
        assert_eq!(
            v.to_string(),
            "slug for term 'Widget' changed from 'old' to 'new'"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let v = Violation::RedirectTargetMissing {
            source: "a".into(),
            target: "b".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "redirect_target_missing");
        assert_eq!(json["source"], "a");
    }
}
