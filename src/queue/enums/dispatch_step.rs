use crate::queue::enums::job_outcome::JobOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStep {
    /// The poll interval elapsed with an empty queue.
    Idle,
    /// A claimed record could not be decoded and was dropped.
    Discarded,
    Handled { id: String, outcome: JobOutcome },
}
