use serde::{Deserialize, Serialize};
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::notify_config::NotifyConfig;
use crate::config::structs::queue_config::QueueConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::transfer_config::TransferConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
    pub rules: String,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub xfer: TransferConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
