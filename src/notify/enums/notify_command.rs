use serde::{Deserialize, Serialize};

/// Wire shape: `{"method": "send_message", "params": {"to": ..., "body": ...}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum NotifyCommand {
    SendMessage {
        to: String,
        body: String,
    },
    SetStatus {
        #[serde(default)]
        show: Option<String>,
        status: String,
    },
}
