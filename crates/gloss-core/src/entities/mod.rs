//! Glossary entities.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Records are
//! closed (`deny_unknown_fields`), so the derived schemas reject extra keys and
//! `gloss-schema` can validate raw input against them directly.

mod export;
mod snapshot;
mod term;

pub use export::ExportDocument;
pub use snapshot::{Redirect, Snapshot};
pub use term::TermRecord;
