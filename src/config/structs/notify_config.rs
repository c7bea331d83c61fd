use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub sendto: String,
}
