use crate::queue::structs::queue_names::QueueNames;

impl QueueNames {
    pub fn for_class(class: &str) -> QueueNames {
        QueueNames {
            queue: format!("queue_{}", class),
            work: format!("work_{}", class),
        }
    }
}
