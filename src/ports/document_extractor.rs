//! Document extractor port.
//!
//! Turns an uploaded case file into the structured incident record.
//! The only implementation is a simulation returning canned records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::incident::Incident;

/// Errors raised by an extractor.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Extracted record failed validation: {0}")]
    InvalidRecord(#[from] ValidationError),
}

impl From<ExtractionError> for DomainError {
    fn from(err: ExtractionError) -> Self {
        DomainError::new(ErrorCode::ExtractionFailed, err.to_string())
    }
}

/// Port for structured extraction from unstructured documents.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extracts one incident record from a file.
    ///
    /// # Errors
    ///
    /// - `UnsupportedDocument` if the file cannot be processed
    /// - `InvalidRecord` if the produced record violates incident invariants
    async fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<Incident, ExtractionError>;
}
