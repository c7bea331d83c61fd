use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TrackerEntry {
    pub url: String,
    /// Protocol, e.g. `http`, `udp` or `dht`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tracker_type: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub fail_count: Option<u64>,
    #[serde(default)]
    pub success_count: Option<u64>,
}
