use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Keyword already exists: {0}")]
    AlreadyExists(String),

    #[error("Keyword not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid keyword: {0}")]
    Invalid(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt keyword file: {0}")]
    Parse(#[from] serde_json::Error),
}
