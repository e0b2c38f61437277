use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("std::io::Error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Error deserializing records: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),
}

pub type FolioResult<T> = std::result::Result<T, FolioError>;
