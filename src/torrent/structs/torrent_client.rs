use std::sync::Arc;
use crate::torrent::structs::normalizer::Normalizer;
use crate::torrent::traits::torrent_daemon::TorrentDaemon;

#[derive(Clone)]
pub struct TorrentClient {
    pub(crate) daemon: Arc<dyn TorrentDaemon>,
    pub(crate) normalizer: Normalizer,
}
