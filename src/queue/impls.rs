pub mod dispatcher;
pub mod handler_registry;
pub mod job;
pub mod job_outcome;
pub mod queue_names;
pub mod xfer_job;
