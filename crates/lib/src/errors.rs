use thiserror::Error;

/// Custom error types for the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage connection error: {0}")]
    Connection(String),
    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

impl From<turso::Error> for StoreError {
    fn from(err: turso::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}
