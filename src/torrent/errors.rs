use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("RPC error in {method}: {message}")]
    RpcError { method: String, message: String },

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Daemon not connected: {0}")]
    NotConnected(String),

    #[error("Torrent not found: {0}")]
    NotFound(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Move failed: {0}")]
    MoveError(String),

    #[error("Unsupported backend: {0}")]
    Unsupported(String),
}
