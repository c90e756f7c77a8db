use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    /// Server-side misconfiguration, e.g. an unreadable admin token hash.
    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
