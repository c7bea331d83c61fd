use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed { program: String, status: String, stderr: String },

    #[error("Local path not found: {0}")]
    MissingPath(String),

    #[error("Task error: {0}")]
    TaskError(String),
}
