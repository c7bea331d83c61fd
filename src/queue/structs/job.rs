use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A queued job: an opaque id plus class-specific payload fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
