use std::collections::HashMap;
use std::sync::Arc;
use crate::queue::traits::job_handler::JobHandler;

#[derive(Default, Clone)]
pub struct HandlerRegistry {
    pub(crate) handlers: HashMap<String, Arc<dyn JobHandler>>,
}
