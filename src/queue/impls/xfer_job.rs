use serde_json::{Map, Value};
use crate::queue::structs::xfer_job::XferJob;

impl XferJob {
    /// A transfer job without an id; `enqueue` assigns one.
    pub fn new(thash: &str, opts: Map<String, Value>) -> XferJob {
        XferJob {
            id: String::new(),
            thash: thash.to_string(),
            opts,
        }
    }
}
