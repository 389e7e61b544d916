use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("uniqueness violation: {0}")]
    AlreadyExists(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}
