use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueueConfig {
    pub classes: Vec<String>,
    pub poll_interval: u64,
    pub watch_parent: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            classes: vec![String::from("xfer")],
            poll_interval: 5,
            watch_parent: true,
        }
    }
}
