use thiserror::Error;

use crate::domain::nutrition::extractor::ExtractionError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("{0}")]
    ServiceNotConfigured(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
