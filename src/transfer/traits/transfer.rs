use std::path::Path;
use async_trait::async_trait;
use crate::transfer::errors::TransferError;

#[async_trait]
pub trait Transfer: Send + Sync {
    /// Copies `local` (file or directory) to `remote`; returns the bytes sent.
    async fn transfer(&self, local: &Path, remote: &str) -> Result<u64, TransferError>;
}
