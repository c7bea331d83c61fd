use std::fmt;
use crate::queue::enums::job_outcome::JobOutcome;

impl JobOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, JobOutcome::Failure(_))
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutcome::Success => write!(f, "success"),
            JobOutcome::Warnings(warning) => write!(f, "success with warnings: {}", warning),
            JobOutcome::Failure(code) => write!(f, "failure (code {})", code),
        }
    }
}
