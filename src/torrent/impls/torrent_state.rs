use std::fmt;
use crate::torrent::enums::torrent_state::TorrentState;

impl TorrentState {
    /// Maps a Deluge state string.
    pub fn from_deluge(state: &str) -> TorrentState {
        match state {
            "Queued" => TorrentState::NotStarted,
            "Checking" | "Allocating" => TorrentState::Checking,
            "Paused" => TorrentState::Paused,
            "Downloading" => TorrentState::Downloading,
            "Seeding" => TorrentState::Seeding,
            other => TorrentState::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TorrentState::NotStarted => "not_started",
            TorrentState::Checking => "checking",
            TorrentState::Paused => "paused",
            TorrentState::Downloading => "downloading",
            TorrentState::Complete => "complete",
            TorrentState::Seeding => "seeding",
            TorrentState::Unknown(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for TorrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TorrentState::Unknown(raw) => write!(f, "unknown({})", raw),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
