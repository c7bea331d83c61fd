/// List primitives consumed by the queue and presence channel.
pub mod list_store;
