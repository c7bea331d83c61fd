use async_trait::async_trait;
use crate::queue::enums::job_outcome::JobOutcome;
use crate::queue::structs::job::Job;

#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn handle(&self, job: &Job) -> JobOutcome;
}
