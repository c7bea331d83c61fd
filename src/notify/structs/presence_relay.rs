use std::sync::Arc;
use std::time::Duration;
use crate::common::structs::parent_watch::ParentWatch;
use crate::notify::traits::notification_sink::NotificationSink;
use crate::store::traits::list_store::ListStore;

pub struct PresenceRelay {
    pub(crate) store: Arc<dyn ListStore>,
    pub(crate) sink: Arc<dyn NotificationSink>,
    pub(crate) poll_interval: Duration,
    pub(crate) parent: ParentWatch,
}
