use crate::torrent::enums::canonical_field::{CanonicalField, FileField, TrackerField};
use crate::torrent::enums::torrent_backend::TorrentBackend;
use crate::torrent::structs::backend_schema::BackendSchema;

pub static DELUGE_SCHEMA: BackendSchema = BackendSchema {
    backend: TorrentBackend::deluge,
    torrent: &[
        ("hash", CanonicalField::Hash),
        ("name", CanonicalField::Name),
        ("save_path", CanonicalField::BasePath),
        ("time_added", CanonicalField::TimeAdded),
        ("comment", CanonicalField::Comment),
        ("message", CanonicalField::Message),
        ("tracker_status", CanonicalField::TrackerStatus),
        ("tracker_host", CanonicalField::TrackerHost),
        ("total_size", CanonicalField::TotalSize),
        ("total_done", CanonicalField::CompletedSize),
        ("eta", CanonicalField::Eta),
        ("ratio", CanonicalField::Ratio),
        ("total_uploaded", CanonicalField::Uploaded),
        ("all_time_download", CanonicalField::Downloaded),
        ("upload_payload_rate", CanonicalField::UploadRate),
        ("download_payload_rate", CanonicalField::DownloadRate),
        ("num_peers", CanonicalField::ConnectedPeers),
        ("num_seeds", CanonicalField::ConnectedSeeds),
        ("total_peers", CanonicalField::TotalPeers),
        ("total_seeds", CanonicalField::TotalSeeds),
        ("private", CanonicalField::Private),
        ("state", CanonicalField::State),
        ("active_time", CanonicalField::TimeActive),
        ("num_files", CanonicalField::FileCount),
        ("num_pieces", CanonicalField::PieceCount),
        ("piece_length", CanonicalField::PieceLength),
        ("next_announce", CanonicalField::NextAnnounce),
        ("tracker", CanonicalField::TrackerUrl),
    ],
    file: &[
        ("path", FileField::Path),
        ("index", FileField::Index),
        ("offset", FileField::Offset),
        ("size", FileField::Size),
    ],
    tracker: &[
        ("fails", TrackerField::FailCount),
        ("url", TrackerField::Url),
    ],
    derived_inputs: &[],
    detail_fields: &["files", "file_progress", "file_priorities", "trackers"],
};

pub static RTORRENT_SCHEMA: BackendSchema = BackendSchema {
    backend: TorrentBackend::rtorrent,
    torrent: &[
        ("d.hash", CanonicalField::Hash),
        ("d.name", CanonicalField::Name),
        ("d.base_path", CanonicalField::Path),
        ("d.directory_base", CanonicalField::BasePath),
        ("d.creation_date", CanonicalField::TimeAdded),
        ("d.message", CanonicalField::Message),
        ("d.size_bytes", CanonicalField::TotalSize),
        ("d.completed_bytes", CanonicalField::CompletedSize),
        ("d.ratio", CanonicalField::Ratio),
        ("d.up.total", CanonicalField::Uploaded),
        ("d.down.total", CanonicalField::Downloaded),
        ("d.up.rate", CanonicalField::UploadRate),
        ("d.down.rate", CanonicalField::DownloadRate),
        ("d.peers_connected", CanonicalField::ConnectedPeers),
        ("d.peers_complete", CanonicalField::ConnectedSeeds),
        ("d.is_private", CanonicalField::Private),
        ("d.size_files", CanonicalField::FileCount),
        ("d.size_chunks", CanonicalField::PieceCount),
    ],
    file: &[
        ("f.path", FileField::Path),
        ("f.offset", FileField::Offset),
        ("f.size_bytes", FileField::Size),
        ("f.priority", FileField::Priority),
    ],
    tracker: &[
        ("t.failed_counter", TrackerField::FailCount),
        ("t.success_counter", TrackerField::SuccessCount),
        ("t.url", TrackerField::Url),
        ("t.is_enabled", TrackerField::Enabled),
    ],
    derived_inputs: &["d.complete", "d.is_active", "d.is_hash_checking", "d.state"],
    detail_fields: &["files", "trackers"],
};

/// rTorrent `t.type` values, indexed by the raw number.
pub const RTORRENT_TRACKER_TYPES: [Option<&str>; 4] = [None, Some("http"), Some("udp"), Some("dht")];

pub fn schema_for(backend: TorrentBackend) -> &'static BackendSchema {
    match backend {
        TorrentBackend::deluge => &DELUGE_SCHEMA,
        TorrentBackend::rtorrent => &RTORRENT_SCHEMA,
    }
}
