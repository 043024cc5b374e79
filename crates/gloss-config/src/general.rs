//! General application configuration.

use serde::{Deserialize, Serialize};

/// How the CLI prints reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One line per violation or score.
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default report format for CLI output.
    #[serde(default)]
    pub default_format: ReportFormat,
}
