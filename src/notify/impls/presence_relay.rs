use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use crate::common::structs::parent_watch::ParentWatch;
use crate::notify::enums::notify_command::NotifyCommand;
use crate::notify::errors::NotifyError;
use crate::notify::structs::presence_relay::PresenceRelay;
use crate::notify::traits::notification_sink::NotificationSink;
use crate::notify::{NOTIFY_LIST, NOTIFY_WORK_LIST};
use crate::store::traits::list_store::ListStore;

impl PresenceRelay {
    pub fn new(
        store: Arc<dyn ListStore>,
        sink: Arc<dyn NotificationSink>,
        poll_interval: Duration,
        parent: ParentWatch,
    ) -> PresenceRelay {
        PresenceRelay { store, sink, poll_interval, parent }
    }

    /// Requeues commands a previous relay claimed but never delivered.
    pub async fn recover(&self) -> Result<usize, NotifyError> {
        let mut recovered = 0;
        while let Some(raw) = self.store.pop(NOTIFY_WORK_LIST).await? {
            self.store.push(NOTIFY_LIST, &raw).await?;
            recovered += 1;
        }
        Ok(recovered)
    }

    /// Delivers at most one command. Returns false when the poll interval passed idle.
    pub async fn relay_next(&self) -> Result<bool, NotifyError> {
        let Some(raw) = self.store.pop_blocking_rotate(NOTIFY_LIST, NOTIFY_WORK_LIST, self.poll_interval).await? else {
            return Ok(false);
        };
        match serde_json::from_str::<NotifyCommand>(&raw) {
            Ok(command) => {
                if let Err(e) = command.dispatch(self.sink.as_ref()).await {
                    warn!("[Notify] Delivery of {:?} failed: {}", command, e);
                }
            }
            Err(e) => error!("[Notify] Dropping corrupt command: {} ({})", e, raw),
        }
        self.store.remove(NOTIFY_WORK_LIST, &raw).await?;
        Ok(true)
    }

    pub async fn run(&self) -> Result<(), NotifyError> {
        let recovered = self.recover().await?;
        info!("[Notify] Relay started ({} command(s) recovered)", recovered);
        loop {
            match self.relay_next().await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    error!("[Notify] Relay: {}", e);
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
            if !self.parent.is_alive() {
                info!("[Notify] Parent process gone, stopping relay");
                return Ok(());
            }
        }
    }
}
