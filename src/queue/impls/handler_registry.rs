use std::collections::HashMap;
use std::sync::Arc;
use crate::queue::structs::handler_registry::HandlerRegistry;
use crate::queue::traits::job_handler::JobHandler;

impl HandlerRegistry {
    pub fn new() -> HandlerRegistry {
        HandlerRegistry { handlers: HashMap::new() }
    }

    pub fn register(&mut self, class: &str, handler: Arc<dyn JobHandler>) -> &mut HandlerRegistry {
        self.handlers.insert(class.to_string(), handler);
        self
    }

    pub fn get(&self, class: &str) -> Option<Arc<dyn JobHandler>> {
        self.handlers.get(class).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self.handlers.keys().cloned().collect();
        classes.sort();
        classes
    }
}
