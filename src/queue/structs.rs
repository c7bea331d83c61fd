/// Generic job record.
pub mod job;

/// Payload of the `xfer` job class.
pub mod xfer_job;

/// Queue and work list names of one job class.
pub mod queue_names;

/// Pending and in-flight counts of one job class.
pub mod queue_lengths;

/// Handlers keyed by job class.
pub mod handler_registry;

/// Worker-side dispatch loop.
pub mod dispatcher;
