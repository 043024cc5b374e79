//! # gloss-export
//!
//! Turns a validated snapshot into the versioned publication document.
//!
//! Export is all-or-nothing: every term is canonicalized, the terms are
//! sorted by slug, the assembled document is checked against the closed
//! export schema, and the rendered output is size-guarded. The first failure
//! aborts with an [`ExportError`] and no artifact.
//!
//! The caller supplies the version identifier and timestamp ([`ExportMeta`]);
//! this crate reads no clock and touches no files.

mod document;
mod error;
mod exporter;
mod gate;
mod options;
mod render;

pub use document::{build_document, format_timestamp};
pub use error::ExportError;
pub use exporter::{ExportArtifact, ExportOutcome, Exporter, export_document};
pub use gate::{has_new_slugs, snapshot_from_value};
pub use options::{DEFAULT_SIZE_THRESHOLD_BYTES, ExportMeta, ExportOptions};
pub use render::{Rendered, render};
