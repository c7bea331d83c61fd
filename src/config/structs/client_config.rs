use crate::torrent::enums::torrent_backend::TorrentBackend;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub backend: TorrentBackend,
    pub url: String,
    pub password: String,
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: TorrentBackend::deluge,
            url: "http://127.0.0.1:8112/json".to_string(),
            password: "deluge".to_string(),
            timeout: 30,
        }
    }
}
