//! Consistency and validation-phase error types.

use gloss_schema::SchemaError;
use thiserror::Error;

use crate::violation::Violation;

/// Every consistency violation found in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("found {} consistency violation(s)", .violations.len())]
pub struct ConsistencyError {
    pub violations: Vec<Violation>,
}

impl ConsistencyError {
    /// One human-readable line per violation, in detection order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Failure of the validation phase (schema, then consistency).
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

impl ValidationError {
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Schema(err) => err.messages(),
            Self::Consistency(err) => err.messages(),
        }
    }
}
