/// Callback invoked for every claimed job of a class.
pub mod job_handler;
