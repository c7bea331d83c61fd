use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;

/// Deluge web UI JSON-RPC transport.
#[derive(Debug, Clone)]
pub struct DelugeWebClient {
    pub(crate) http: reqwest::Client,
    pub(crate) url: String,
    pub(crate) password: String,
    pub(crate) session: Arc<Mutex<Option<String>>>,
    pub(crate) request_id: Arc<AtomicU64>,
}
