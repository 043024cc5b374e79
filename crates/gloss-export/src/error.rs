//! Export error types.

use gloss_core::TermError;
use gloss_schema::SchemaError;
use thiserror::Error;

/// Every way an export can fail. Each aborts the export immediately.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The raw input is not `{ "terms": [...] }`-shaped.
    #[error("Malformed export input: {0}")]
    MalformedRoot(String),

    /// A term could not be canonicalized.
    #[error("Cannot export term: {0}")]
    Term(#[from] TermError),

    /// The assembled document does not satisfy the export schema.
    #[error("Export document failed schema validation: {}", .0.messages().join("; "))]
    Schema(SchemaError),

    /// `terms_count` disagrees with the number of terms.
    #[error("terms_count is {terms_count} but the document has {actual} terms")]
    CountMismatch { terms_count: usize, actual: usize },

    #[error("Failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The rendered output exceeds the configured threshold.
    #[error("Export is {size} bytes, over the {threshold} byte limit; refusing to write")]
    TooLarge { size: u64, threshold: u64 },
}
