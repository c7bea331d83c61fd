use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QueueLengths {
    pub class: String,
    pub queued: u64,
    pub in_flight: u64,
}
