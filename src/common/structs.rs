/// Free-form error used during boot (configuration, logging).
pub mod custom_error;

/// Supervising parent process tracker.
pub mod parent_watch;
