use serde::{Deserialize, Serialize};
use crate::torrent::enums::torrent_state::TorrentState;
use crate::torrent::structs::torrent_file::TorrentFile;
use crate::torrent::structs::tracker_entry::TrackerEntry;

/// Backend-independent torrent status record.
///
/// `progress` always equals `completed_size / total_size * 100` (0 when the
/// total is 0). `files` and `trackers` are `None` unless full detail was
/// requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TorrentInfo {
    pub hash: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_added: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_url: Option<String>,
    pub total_size: u64,
    pub completed_size: u64,
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_peers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_seeds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_peers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seeds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    pub state: TorrentState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_active: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_announce: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<TorrentFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackers: Option<Vec<TrackerEntry>>,
}
