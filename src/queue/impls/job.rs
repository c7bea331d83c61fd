use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::common::common::job_id_now;
use crate::queue::errors::QueueError;
use crate::queue::structs::job::Job;

impl Job {
    /// Builds a job from payload fields, taking `id` from the payload or the clock.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Job, QueueError> {
        let id = match payload.remove("id") {
            None | Some(Value::Null) => job_id_now(),
            Some(Value::String(id)) if !id.is_empty() => id,
            Some(Value::String(_)) => job_id_now(),
            Some(other) => return Err(QueueError::InvalidJob(format!("id must be a string, got {}", other))),
        };
        Ok(Job { id, fields: payload })
    }

    pub fn decode(raw: &str) -> Result<Job, QueueError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn encode(&self) -> Result<String, QueueError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads the job as a class-specific record such as `XferJob`.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, QueueError> {
        let mut record = self.fields.clone();
        record.insert("id".to_string(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(record))?)
    }
}
