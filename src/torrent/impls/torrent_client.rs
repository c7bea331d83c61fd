use std::sync::Arc;
use log::{info, warn};
use crate::config::structs::client_config::ClientConfig;
use crate::torrent::enums::torrent_backend::TorrentBackend;
use crate::torrent::errors::ClientError;
use crate::torrent::structs::deluge_web_client::DelugeWebClient;
use crate::torrent::structs::normalizer::Normalizer;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::torrent::structs::torrent_info::TorrentInfo;
use crate::torrent::traits::torrent_daemon::{NativePayload, TorrentDaemon};

impl TorrentClient {
    pub fn new(daemon: Arc<dyn TorrentDaemon>) -> Result<TorrentClient, ClientError> {
        let normalizer = Normalizer::new(daemon.backend())?;
        Ok(TorrentClient { daemon, normalizer })
    }

    pub fn from_config(config: &ClientConfig) -> Result<TorrentClient, ClientError> {
        match config.backend {
            TorrentBackend::deluge => TorrentClient::new(Arc::new(DelugeWebClient::new(config)?)),
            TorrentBackend::rtorrent => Err(ClientError::Unsupported(String::from(
                "rtorrent payloads can be normalized but no rtorrent transport is available",
            ))),
        }
    }

    pub fn backend(&self) -> TorrentBackend {
        self.normalizer.backend()
    }

    /// Fetches one torrent with file and tracker detail.
    pub async fn get_torrent(&self, id: &str) -> Result<TorrentInfo, ClientError> {
        let fields = self.normalizer.request_fields(true);
        let native = self.daemon.get_torrent_status(id, &fields).await?;
        if native.is_empty() {
            return Err(ClientError::NotFound(id.to_string()));
        }
        self.normalizer.normalize(&native)
    }

    /// Fetches every torrent matching `filter`; records that fail to normalize are skipped.
    pub async fn list_torrents(&self, filter: &NativePayload, full: bool) -> Result<Vec<TorrentInfo>, ClientError> {
        let fields = self.normalizer.request_fields(full);
        let natives = self.daemon.get_torrents_status(filter, &fields).await?;
        let mut torrents = Vec::with_capacity(natives.len());
        for (id, native) in natives {
            let Some(native) = native.as_object() else {
                warn!("[Client] Skipping {}: status is not an object", id);
                continue;
            };
            match self.normalizer.normalize(native) {
                Ok(info) => torrents.push(info),
                Err(e) => warn!("[Client] Skipping {}: {}", id, e),
            }
        }
        Ok(torrents)
    }

    /// Moves a torrent's storage to `dest`, which must be an existing directory.
    pub async fn move_torrent(&self, id: &str, dest: &str) -> Result<String, ClientError> {
        let target = tokio::fs::canonicalize(dest)
            .await
            .map_err(|e| ClientError::MoveError(format!("{}: {}", dest, e)))?;
        let metadata = tokio::fs::metadata(&target)
            .await
            .map_err(|e| ClientError::MoveError(format!("{}: {}", target.display(), e)))?;
        if !metadata.is_dir() {
            return Err(ClientError::MoveError(format!("{} is not a directory", target.display())));
        }

        let target = target.to_string_lossy().to_string();
        if !self.daemon.move_storage(&[id.to_string()], &target).await? {
            return Err(ClientError::MoveError(format!("daemon refused to move {} to {}", id, target)));
        }
        info!("[Client] Moved {} to {}", id, target);
        Ok(target)
    }
}
