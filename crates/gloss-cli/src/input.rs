//! Loading JSON documents from disk.

use std::path::Path;

use anyhow::Context;
use gloss_core::{ExportDocument, Snapshot};

pub fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Load a previously published state.
///
/// Accepts either an export document (`{ version, generated_at, terms_count,
/// terms }`) or a plain glossary document.
pub fn read_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let raw = read_json(path)?;
    snapshot_from_published(&raw).with_context(|| format!("failed to load {}", path.display()))
}

fn snapshot_from_published(raw: &serde_json::Value) -> anyhow::Result<Snapshot> {
    if raw.get("version").is_some() {
        let document: ExportDocument = serde_json::from_value(raw.clone())?;
        return Ok(Snapshot::new(document.terms));
    }
    Ok(gloss_export::snapshot_from_value(raw)?)
}
