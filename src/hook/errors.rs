use thiserror::Error;
use crate::queue::errors::QueueError;
use crate::torrent::errors::ClientError;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("fetch failed: {0}")]
    FetchError(ClientError),

    #[error("could not create {path}: {source}")]
    MkdirError { path: String, source: std::io::Error },

    #[error("move failed: {0}")]
    MoveError(ClientError),

    #[error("enqueue failed: {0}")]
    EnqueueError(#[from] QueueError),
}
