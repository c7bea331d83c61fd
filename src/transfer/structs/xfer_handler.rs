use std::sync::Arc;
use crate::config::structs::transfer_config::TransferConfig;
use crate::notify::structs::notifier::Notifier;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::transfer::traits::transfer::Transfer;

pub struct XferHandler {
    pub(crate) client: TorrentClient,
    pub(crate) transfer: Arc<dyn Transfer>,
    pub(crate) notifier: Notifier,
    pub(crate) config: TransferConfig,
}
