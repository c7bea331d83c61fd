use crate::torrent::enums::torrent_backend::TorrentBackend;
use std::fmt;

impl fmt::Display for TorrentBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TorrentBackend::deluge => write!(f, "deluge"),
            TorrentBackend::rtorrent => write!(f, "rtorrent"),
        }
    }
}
