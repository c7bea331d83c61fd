/// What happened to one claimed job.
pub mod dispatch_step;

/// Tri-state result reported by a job handler.
pub mod job_outcome;
