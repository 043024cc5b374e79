//! Exporter configuration.

use gloss_core::OversizePolicy;
use serde::{Deserialize, Serialize};

/// 2 MiB.
const fn default_size_threshold_bytes() -> u64 {
    2 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Indent the exported JSON.
    #[serde(default)]
    pub pretty: bool,

    /// Rendered size above which `on_oversize` applies.
    #[serde(default = "default_size_threshold_bytes")]
    pub size_threshold_bytes: u64,

    /// Only export when a new slug was introduced.
    #[serde(default)]
    pub only_if_new: bool,

    #[serde(default)]
    pub on_oversize: OversizePolicy,

    /// Version identifier stamped on the export. Empty means the caller
    /// supplies one.
    #[serde(default)]
    pub version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            size_threshold_bytes: default_size_threshold_bytes(),
            only_if_new: false,
            on_oversize: OversizePolicy::default(),
            version: String::new(),
        }
    }
}

impl ExportConfig {
    /// The configured version, if one is set.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        let version = self.version.trim();
        (!version.is_empty()).then_some(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert!(!config.pretty);
        assert!(!config.only_if_new);
        assert_eq!(config.size_threshold_bytes, 2_097_152);
        assert_eq!(config.on_oversize, OversizePolicy::Refuse);
        assert_eq!(config.version(), None);
    }

    #[test]
    fn blank_version_is_unset() {
        let config = ExportConfig {
            version: "  ".into(),
            ..ExportConfig::default()
        };
        assert_eq!(config.version(), None);
    }
}
