//! Schema validation error types.

use serde::Serialize;
use thiserror::Error;

/// One structural problem in a validated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value, e.g. `/terms/3/slug`. The document
    /// root is `/`.
    pub location: String,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed with {} violation(s)", .violations.len())]
    ValidationFailed {
        /// Every violation, in validator order.
        violations: Vec<SchemaViolation>,
    },

    /// Schema compilation error.
    #[error("Schema compilation error: {0}")]
    Compilation(String),
}

impl SchemaError {
    /// Violations carried by this error. Empty for non-validation variants.
    #[must_use]
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            Self::ValidationFailed { violations } => violations,
            Self::NotFound(_) | Self::Compilation(_) => &[],
        }
    }

    /// One human-readable line per violation, or the error itself.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { violations } => {
                violations.iter().map(ToString::to_string).collect()
            }
            Self::NotFound(_) | Self::Compilation(_) => vec![self.to_string()],
        }
    }
}
