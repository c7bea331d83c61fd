use std::sync::Arc;
use log::{debug, warn};
use crate::config::structs::notify_config::NotifyConfig;
use crate::notify::enums::notify_command::NotifyCommand;
use crate::notify::NOTIFY_LIST;
use crate::notify::structs::notifier::Notifier;
use crate::store::traits::list_store::ListStore;

impl Notifier {
    pub fn new(store: Arc<dyn ListStore>, config: &NotifyConfig) -> Notifier {
        Notifier {
            store: config.enabled.then_some(store),
            sendto: config.sendto.clone(),
        }
    }

    pub fn disabled() -> Notifier {
        Notifier { store: None, sendto: String::new() }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Queues `command` for the relay. Failures are logged, never returned.
    pub async fn send(&self, command: NotifyCommand) {
        let Some(store) = &self.store else {
            debug!("[Notify] Disabled, dropping {:?}", command);
            return;
        };
        let raw = match serde_json::to_string(&command) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("[Notify] Could not encode {:?}: {}", command, e);
                return;
            }
        };
        if let Err(e) = store.push(NOTIFY_LIST, &raw).await {
            warn!("[Notify] Could not queue notification: {}", e);
        }
    }

    pub async fn message(&self, body: &str) {
        self.send(NotifyCommand::SendMessage {
            to: self.sendto.clone(),
            body: body.to_string(),
        }).await;
    }

    pub async fn status(&self, show: Option<&str>, status: &str) {
        self.send(NotifyCommand::SetStatus {
            show: show.map(str::to_string),
            status: status.to_string(),
        }).await;
    }
}
