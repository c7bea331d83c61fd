use serde_json::{Map, Value};
use crate::torrent::enums::torrent_state::TorrentState;
use crate::torrent::structs::state_bits::StateBits;
use crate::torrent::torrent::value_i64;

impl StateBits {
    /// Reads the four bits from an rTorrent payload; missing bits read as 0.
    pub fn from_payload(native: &Map<String, Value>) -> StateBits {
        let bit = |key: &str| native.get(key).and_then(value_i64).unwrap_or(0);
        StateBits {
            complete: bit("d.complete"),
            active: bit("d.is_active"),
            hashing: bit("d.is_hash_checking"),
            started: bit("d.state"),
        }
    }

    pub fn to_state(&self) -> TorrentState {
        let bits = [self.complete, self.active, self.hashing, self.started];
        if bits.iter().any(|b| *b != 0 && *b != 1) {
            return TorrentState::Unknown(self.raw());
        }
        let (complete, active, hashing, started) =
            (self.complete == 1, self.active == 1, self.hashing == 1, self.started == 1);
        if !started {
            TorrentState::NotStarted
        } else if hashing {
            TorrentState::Checking
        } else {
            match (complete, active) {
                (false, false) => TorrentState::Paused,
                (false, true) => TorrentState::Downloading,
                (true, false) => TorrentState::Complete,
                (true, true) => TorrentState::Seeding,
            }
        }
    }

    pub fn raw(&self) -> String {
        format!(
            "complete={} active={} hashing={} state={}",
            self.complete, self.active, self.hashing, self.started
        )
    }
}
