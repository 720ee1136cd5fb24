use thiserror::Error;

use crate::models::ApiError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::Unknown(msg) => ApiError::InternalError(msg),
            _ => ApiError::InternalError("An unknown error occurred".to_string()),
        }
    }
}
