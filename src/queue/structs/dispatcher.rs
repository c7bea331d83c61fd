use std::sync::Arc;
use std::time::Duration;
use crate::common::structs::parent_watch::ParentWatch;
use crate::queue::structs::queue_names::QueueNames;
use crate::queue::traits::job_handler::JobHandler;
use crate::store::traits::list_store::ListStore;

pub struct Dispatcher {
    pub(crate) store: Arc<dyn ListStore>,
    pub(crate) class: String,
    pub(crate) names: QueueNames,
    pub(crate) handler: Arc<dyn JobHandler>,
    pub(crate) poll_interval: Duration,
    pub(crate) parent: ParentWatch,
}
