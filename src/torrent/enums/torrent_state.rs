use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TorrentState {
    #[default]
    NotStarted,
    Checking,
    Paused,
    Downloading,
    Complete,
    Seeding,
    /// State the backend reported that has no canonical equivalent; carries the raw value.
    Unknown(String),
}
