//! Ingest error types

use argmap_validator::ValidationResult;
use thiserror::Error;

/// Errors that can occur while ingesting a document
#[derive(Error, Debug)]
pub enum IngestError {
    /// The document failed validation; the full diagnostics list is
    /// carried so callers can surface every problem at once
    #[error("document rejected: {}", .0.diagnostics.join("; "))]
    Rejected(ValidationResult),

    /// The storage collaborator failed
    #[error("store error: {0}")]
    Store(String),
}

impl IngestError {
    /// The diagnostics behind a rejection, if this is one
    pub fn diagnostics(&self) -> Option<&[String]> {
        match self {
            IngestError::Rejected(result) => Some(&result.diagnostics),
            IngestError::Store(_) => None,
        }
    }
}
