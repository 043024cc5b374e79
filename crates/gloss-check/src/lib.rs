//! # gloss-check
//!
//! Consistency checks over a structurally valid glossary snapshot:
//! - duplicate slugs
//! - duplicate display names and aliases, compared by normalized key
//! - slug changes relative to a previously published base snapshot
//! - redirect sources that shadow an active slug, and dangling redirect targets
//!
//! Every check runs to completion and all violations are reported together.
//! Lookups go through hash maps, so a check is linear in the number of labels.

mod consistency;
mod error;
mod pipeline;
mod violation;

pub use consistency::check_consistency;
pub use error::{ConsistencyError, ValidationError};
pub use pipeline::{validate_document, validate_document_with};
pub use violation::Violation;
