use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TorrentFile {
    pub index: u64,
    pub path: String,
    pub offset: u64,
    pub size: u64,
    /// Percent complete, 0 to 100.
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}
