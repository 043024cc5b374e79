//! The export entry points.

use gloss_core::{ExportDocument, Snapshot};
use gloss_schema::SchemaRegistry;
use tracing::debug;

use crate::document::build_document;
use crate::error::ExportError;
use crate::gate::has_new_slugs;
use crate::options::{ExportMeta, ExportOptions};
use crate::render::render;

/// A finished export: the document and its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub document: ExportDocument,
    /// Serialized document, ending in a newline.
    pub output: String,
    pub size_bytes: u64,
    /// Over the size threshold, allowed by [`gloss_core::OversizePolicy::Warn`].
    pub oversized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported(ExportArtifact),
    /// `only_if_new` was set and no slug was added since the previous snapshot.
    Unchanged,
}

/// Builds export artifacts with a fixed set of options.
///
/// Holds no per-call state; one exporter can serve any number of snapshots.
pub struct Exporter {
    registry: SchemaRegistry,
    options: ExportOptions,
}

impl Exporter {
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self {
            registry: SchemaRegistry::new(),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Build and render the export document.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExportError`] encountered; nothing is produced on
    /// failure.
    pub fn export(
        &self,
        snapshot: &Snapshot,
        meta: &ExportMeta,
    ) -> Result<ExportArtifact, ExportError> {
        let document = build_document(&self.registry, snapshot, meta)?;
        let rendered = render(&document, &self.options)?;

        debug!(
            version = %document.version,
            terms = document.terms_count,
            size_bytes = rendered.size_bytes,
            "export document built"
        );

        Ok(ExportArtifact {
            document,
            output: rendered.text,
            size_bytes: rendered.size_bytes,
            oversized: rendered.oversized,
        })
    }

    /// Export, honouring `only_if_new` against the previously published
    /// snapshot. Without a previous snapshot the export always runs.
    ///
    /// # Errors
    ///
    /// See [`Exporter::export`].
    pub fn export_if_new(
        &self,
        snapshot: &Snapshot,
        previous: Option<&Snapshot>,
        meta: &ExportMeta,
    ) -> Result<ExportOutcome, ExportError> {
        if self.options.only_if_new {
            if let Some(previous) = previous {
                if !has_new_slugs(snapshot, previous) {
                    debug!("no new slugs since previous snapshot, skipping export");
                    return Ok(ExportOutcome::Unchanged);
                }
            }
        }
        self.export(snapshot, meta).map(ExportOutcome::Exported)
    }
}

/// One-shot export with the given options.
///
/// # Errors
///
/// See [`Exporter::export`].
pub fn export_document(
    snapshot: &Snapshot,
    meta: &ExportMeta,
    options: ExportOptions,
) -> Result<ExportArtifact, ExportError> {
    Exporter::new(options).export(snapshot, meta)
}
