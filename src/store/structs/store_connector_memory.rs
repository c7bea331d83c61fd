use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Lists kept in process memory. Clones share the same lists.
#[derive(Debug, Clone)]
pub struct StoreConnectorMemory {
    pub(crate) lists: Arc<Mutex<HashMap<String, VecDeque<String>>>>,
    pub(crate) notify: Arc<Notify>,
    pub(crate) prefix: String,
}
