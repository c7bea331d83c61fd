use serde::{Deserialize, Serialize};

/// Remote SSH destination. An empty `hostname` disables transfers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferConfig {
    pub hostname: String,
    pub user: String,
    pub port: u16,
    pub basepath: String,
    pub keyfile: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            user: String::new(),
            port: 22,
            basepath: String::new(),
            keyfile: String::new(),
        }
    }
}
