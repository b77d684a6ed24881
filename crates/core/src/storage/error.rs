use thiserror::Error;

use crate::catalog::TableId;
use crate::grid::GridError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{table} not found")]
    NotFound { table: TableId },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<GridError> for RepositoryError {
    fn from(err: GridError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
