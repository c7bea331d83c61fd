use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::torrent::enums::torrent_backend::TorrentBackend;
use crate::torrent::errors::ClientError;

/// Native status payload as returned by a daemon.
pub type NativePayload = Map<String, Value>;

/// RPC surface of a torrent daemon.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TorrentDaemon: Send + Sync {
    fn backend(&self) -> TorrentBackend;

    /// Status of one torrent. An unknown id yields an empty payload.
    async fn get_torrent_status(&self, id: &str, fields: &[String]) -> Result<NativePayload, ClientError>;

    /// Status of every torrent matching `filter`, keyed by torrent id.
    async fn get_torrents_status(&self, filter: &NativePayload, fields: &[String]) -> Result<NativePayload, ClientError>;

    async fn move_storage(&self, ids: &[String], dest: &str) -> Result<bool, ClientError>;
}
