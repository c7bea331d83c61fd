use std::path::Path;
use serde_json::Value;
use crate::torrent::enums::canonical_field::CanonicalField;
use crate::torrent::enums::torrent_state::TorrentState;
use crate::torrent::structs::torrent_info::TorrentInfo;
use crate::torrent::torrent::{percent, value_bool, value_f64, value_i64, value_string, value_u64};

impl TorrentInfo {
    /// Stores one remapped native value. Values of the wrong shape are ignored.
    pub fn apply(&mut self, field: CanonicalField, value: &Value) {
        match field {
            CanonicalField::Hash => if let Some(v) = value_string(value) { self.hash = v.to_lowercase() },
            CanonicalField::Name => if let Some(v) = value_string(value) { self.name = v },
            CanonicalField::Path => self.path = value_string(value),
            CanonicalField::BasePath => self.base_path = value_string(value),
            CanonicalField::TimeAdded => self.time_added = value_f64(value),
            CanonicalField::Comment => self.comment = value_string(value),
            CanonicalField::Message => self.message = value_string(value),
            CanonicalField::TrackerStatus => self.tracker_status = value_string(value),
            CanonicalField::TrackerHost => self.tracker_host = value_string(value),
            CanonicalField::TrackerUrl => self.tracker_url = value_string(value),
            CanonicalField::TotalSize => self.total_size = value_u64(value).unwrap_or(0),
            CanonicalField::CompletedSize => self.completed_size = value_u64(value).unwrap_or(0),
            CanonicalField::Eta => self.eta = value_i64(value),
            CanonicalField::Ratio => self.ratio = value_f64(value),
            CanonicalField::Uploaded => self.uploaded = value_u64(value),
            CanonicalField::Downloaded => self.downloaded = value_u64(value),
            CanonicalField::UploadRate => self.upload_rate = value_f64(value),
            CanonicalField::DownloadRate => self.download_rate = value_f64(value),
            CanonicalField::ConnectedPeers => self.connected_peers = value_i64(value),
            CanonicalField::ConnectedSeeds => self.connected_seeds = value_i64(value),
            CanonicalField::TotalPeers => self.total_peers = value_i64(value),
            CanonicalField::TotalSeeds => self.total_seeds = value_i64(value),
            CanonicalField::Private => self.private = value_bool(value),
            CanonicalField::State => if let Some(v) = value_string(value) { self.state = TorrentState::from_deluge(&v) },
            CanonicalField::TimeActive => self.time_active = value_i64(value),
            CanonicalField::FileCount => self.file_count = value_u64(value),
            CanonicalField::PieceCount => self.piece_count = value_u64(value),
            CanonicalField::PieceLength => self.piece_length = value_u64(value),
            CanonicalField::NextAnnounce => self.next_announce = value_i64(value),
        }
    }

    /// Fills the fields every backend derives the same way.
    pub fn derive_common(&mut self) {
        if self.path.is_none()
            && let Some(base) = &self.base_path
            && !self.name.is_empty()
        {
            self.path = Some(format!("{}/{}", base.trim_end_matches('/'), self.name));
        }
        self.progress = percent(self.completed_size as f64, self.total_size as f64);
    }

    /// Whether the payload is a single file. `None` when the file list was not fetched.
    pub fn is_single_file(&self) -> Option<bool> {
        let files = self.files.as_ref()?;
        if files.len() == 1 && files[0].path == self.name {
            return Some(true);
        }
        Some(self.path.as_deref().map(|p| Path::new(p).is_file()).unwrap_or(false))
    }

    /// String value of a field usable as a `moveto` placeholder.
    pub fn field_str(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "hash" => Some(self.hash.clone()),
            "path" => self.path.clone(),
            "base_path" => self.base_path.clone(),
            "tracker_host" => self.tracker_host.clone(),
            "tracker_url" => self.tracker_url.clone(),
            "state" => Some(self.state.as_str().to_string()),
            _ => None,
        }
    }
}
