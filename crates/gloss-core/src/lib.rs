//! # gloss-core
//!
//! Core types and pure normalization functions for the gloss publication pipeline.
//!
//! This crate provides the foundational types shared across all gloss crates:
//! - Term records, snapshots and the export document
//! - The controversy and oversize-policy enums
//! - Slug rules (pattern and length bounds)
//! - Name and term normalization used by every consistency check
//! - Term-level error types
//!
//! Nothing in here performs I/O. Callers hand in already-loaded values.

pub mod entities;
pub mod enums;
pub mod error;
pub mod normalize;
pub mod schema_fields;
pub mod slug;

pub use entities::{ExportDocument, Redirect, Snapshot, TermRecord};
pub use enums::{ControversyLevel, OversizePolicy};
pub use error::{SlugIssue, TermError};
pub use normalize::{normalize_name, normalize_term, present_text};
