use thiserror::Error;
use crate::common::enums::error_code::ErrorCode;
use crate::notify::errors::NotifyError;
use crate::queue::errors::QueueError;
use crate::store::errors::StoreError;
use crate::torrent::errors::ClientError;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("store: {0}")]
    StoreError(#[from] StoreError),

    #[error("client: {0}")]
    ClientError(#[from] ClientError),

    #[error("queue: {0}")]
    QueueError(#[from] QueueError),

    #[error("notify: {0}")]
    NotifyError(#[from] NotifyError),

    #[error("could not spawn {command}: {source}")]
    SpawnError { command: String, source: std::io::Error },

    #[error("{0} child process(es) failed")]
    ChildFailed(usize),
}

impl WorkerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            WorkerError::QueueError(QueueError::NoHandler(_)) => ErrorCode::OptBad,
            _ => ErrorCode::ProcFail,
        }
    }
}
