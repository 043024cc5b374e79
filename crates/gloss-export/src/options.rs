use chrono::{DateTime, Utc};
use gloss_core::OversizePolicy;

/// 2 MiB.
pub const DEFAULT_SIZE_THRESHOLD_BYTES: u64 = 2 * 1024 * 1024;

/// Externally supplied identity of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMeta {
    /// Build or VCS identifier.
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

impl ExportMeta {
    #[must_use]
    pub fn new(version: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            generated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent the rendered JSON.
    pub pretty: bool,
    pub size_threshold_bytes: u64,
    pub on_oversize: OversizePolicy,
    /// Skip the export unless the snapshot introduces a slug the previous
    /// one lacked.
    pub only_if_new: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            size_threshold_bytes: DEFAULT_SIZE_THRESHOLD_BYTES,
            on_oversize: OversizePolicy::Refuse,
            only_if_new: false,
        }
    }
}
