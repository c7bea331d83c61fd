use crate::torrent::enums::canonical_field::{CanonicalField, FileField, TrackerField};

impl CanonicalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Hash => "hash",
            CanonicalField::Name => "name",
            CanonicalField::Path => "path",
            CanonicalField::BasePath => "base_path",
            CanonicalField::TimeAdded => "time_added",
            CanonicalField::Comment => "comment",
            CanonicalField::Message => "message",
            CanonicalField::TrackerStatus => "tracker_status",
            CanonicalField::TrackerHost => "tracker_host",
            CanonicalField::TrackerUrl => "tracker_url",
            CanonicalField::TotalSize => "total_size",
            CanonicalField::CompletedSize => "completed_size",
            CanonicalField::Eta => "eta",
            CanonicalField::Ratio => "ratio",
            CanonicalField::Uploaded => "uploaded",
            CanonicalField::Downloaded => "downloaded",
            CanonicalField::UploadRate => "upload_rate",
            CanonicalField::DownloadRate => "download_rate",
            CanonicalField::ConnectedPeers => "connected_peers",
            CanonicalField::ConnectedSeeds => "connected_seeds",
            CanonicalField::TotalPeers => "total_peers",
            CanonicalField::TotalSeeds => "total_seeds",
            CanonicalField::Private => "private",
            CanonicalField::State => "state",
            CanonicalField::TimeActive => "time_active",
            CanonicalField::FileCount => "file_count",
            CanonicalField::PieceCount => "piece_count",
            CanonicalField::PieceLength => "piece_length",
            CanonicalField::NextAnnounce => "next_announce",
        }
    }
}

impl FileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileField::Path => "path",
            FileField::Index => "index",
            FileField::Offset => "offset",
            FileField::Size => "size",
            FileField::Priority => "priority",
        }
    }
}

impl TrackerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerField::Url => "url",
            TrackerField::FailCount => "fail_count",
            TrackerField::SuccessCount => "success_count",
            TrackerField::Enabled => "enabled",
        }
    }
}
