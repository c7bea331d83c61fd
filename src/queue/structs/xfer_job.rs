use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct XferJob {
    pub id: String,
    /// Torrent id as known to the daemon.
    pub thash: String,
    #[serde(default)]
    pub opts: Map<String, Value>,
}
