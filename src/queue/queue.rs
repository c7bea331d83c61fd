use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::queue::errors::QueueError;
use crate::queue::structs::job::Job;
use crate::queue::structs::queue_lengths::QueueLengths;
use crate::queue::structs::queue_names::QueueNames;
use crate::store::traits::list_store::ListStore;

/// Appends a job to the tail of `class`'s queue and returns its id.
///
/// An `id` field in the payload is kept; otherwise one is taken from the clock.
pub async fn enqueue(store: &dyn ListStore, class: &str, payload: Map<String, Value>) -> Result<String, QueueError> {
    let job = Job::from_payload(payload)?;
    let raw = job.encode()?;
    let names = QueueNames::for_class(class);
    store.push(&names.queue, &raw).await?;
    debug!("[Queue] Enqueued job {} on {}", job.id, store.key(&names.queue));
    Ok(job.id)
}

/// Serializes a typed job record (e.g. `XferJob`) and enqueues it.
pub async fn enqueue_record<T: Serialize + Sync>(store: &dyn ListStore, class: &str, record: &T) -> Result<String, QueueError> {
    match serde_json::to_value(record)? {
        Value::Object(payload) => enqueue(store, class, payload).await,
        other => Err(QueueError::InvalidJob(format!("job payload must be an object, got {}", other))),
    }
}

pub async fn queue_lengths(store: &dyn ListStore, class: &str) -> Result<QueueLengths, QueueError> {
    let names = QueueNames::for_class(class);
    Ok(QueueLengths {
        class: class.to_string(),
        queued: store.length(&names.queue).await?,
        in_flight: store.length(&names.work).await?,
    })
}
