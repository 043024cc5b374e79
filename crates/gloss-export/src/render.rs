//! Serialization and the size guard.

use gloss_core::{ExportDocument, OversizePolicy};
use tracing::warn;

use crate::error::ExportError;
use crate::options::ExportOptions;

/// Serialized export output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// JSON text, always ending in a newline.
    pub text: String,
    pub size_bytes: u64,
    /// Set when the threshold was exceeded under [`OversizePolicy::Warn`].
    pub oversized: bool,
}

/// Serialize compactly or indented, append a trailing newline, and apply the
/// size guard.
///
/// # Errors
///
/// Returns `ExportError::TooLarge` when the output exceeds
/// `size_threshold_bytes` under [`OversizePolicy::Refuse`].
pub fn render(document: &ExportDocument, options: &ExportOptions) -> Result<Rendered, ExportError> {
    let mut text = if options.pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    text.push('\n');

    let size_bytes = u64::try_from(text.len()).unwrap_or(u64::MAX);
    let threshold = options.size_threshold_bytes;
    let oversized = size_bytes > threshold;

    if oversized {
        match options.on_oversize {
            OversizePolicy::Refuse => {
                return Err(ExportError::TooLarge {
                    size: size_bytes,
                    threshold,
                });
            }
            OversizePolicy::Warn => {
                warn!(size_bytes, threshold, "export exceeds size threshold");
            }
        }
    }

    Ok(Rendered {
        text,
        size_bytes,
        oversized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::TermRecord;
    use pretty_assertions::assert_eq;

    fn document() -> ExportDocument {
        ExportDocument {
            version: "v1".into(),
            generated_at: "2026-10-16T09:30:00.000Z".into(),
            terms_count: 1,
            terms: vec![TermRecord::new("foo-bar", "Foo Bar", "x".repeat(80))],
        }
    }

    #[test]
    fn compact_and_pretty_both_end_with_newline() {
        let compact = render(&document(), &ExportOptions::default()).unwrap();
        assert!(compact.text.ends_with("}\n"));
        assert_eq!(compact.text.lines().count(), 1);

        let options = ExportOptions {
            pretty: true,
            ..ExportOptions::default()
        };
        let pretty = render(&document(), &options).unwrap();
        assert!(pretty.text.ends_with("}\n"));
        assert!(pretty.text.lines().count() > 1);
        assert_eq!(pretty.size_bytes, pretty.text.len() as u64);
    }

    #[test]
    fn refuses_oversized_output() {
        let options = ExportOptions {
            size_threshold_bytes: 16,
            ..ExportOptions::default()
        };
        let err = render(&document(), &options).unwrap_err();
        assert!(matches!(err, ExportError::TooLarge { threshold: 16, .. }));
    }

    #[test]
    fn warns_but_renders_when_configured() {
        let options = ExportOptions {
            size_threshold_bytes: 16,
            on_oversize: OversizePolicy::Warn,
            ..ExportOptions::default()
        };
        let rendered = render(&document(), &options).unwrap();
        assert!(rendered.oversized);
    }

    #[test]
    fn output_exactly_at_threshold_is_allowed() {
        let size = render(&document(), &ExportOptions::default()).unwrap().size_bytes;
        let options = ExportOptions {
            size_threshold_bytes: size,
            ..ExportOptions::default()
        };
        let rendered = render(&document(), &options).unwrap();
        assert!(!rendered.oversized);
    }
}
