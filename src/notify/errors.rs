use thiserror::Error;
use crate::store::errors::StoreError;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    SinkError(String),
}
