use thiserror::Error;
use crate::store::errors::StoreError;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid job: {0}")]
    InvalidJob(String),

    #[error("No handler registered for job class '{0}'")]
    NoHandler(String),
}
