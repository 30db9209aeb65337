//! Storage adapter errors.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised inside storage adapters.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize assessment: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize assessment: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match err {
            StorageError::SerializationFailed(_) | StorageError::DeserializationFailed(_) => {
                ErrorCode::SerializationError
            }
            StorageError::IoError(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
