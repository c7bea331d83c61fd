use std::sync::Arc;
use crate::store::traits::list_store::ListStore;

#[derive(Clone)]
pub struct Notifier {
    /// `None` when notifications are disabled.
    pub(crate) store: Option<Arc<dyn ListStore>>,
    pub(crate) sendto: String,
}
