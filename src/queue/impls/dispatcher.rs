use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use crate::common::structs::parent_watch::ParentWatch;
use crate::queue::enums::dispatch_step::DispatchStep;
use crate::queue::enums::job_outcome::JobOutcome;
use crate::queue::errors::QueueError;
use crate::queue::structs::dispatcher::Dispatcher;
use crate::queue::structs::handler_registry::HandlerRegistry;
use crate::queue::structs::job::Job;
use crate::queue::structs::queue_names::QueueNames;
use crate::store::traits::list_store::ListStore;

impl Dispatcher {
    pub fn new(
        store: Arc<dyn ListStore>,
        registry: &HandlerRegistry,
        class: &str,
        poll_interval: Duration,
        parent: ParentWatch,
    ) -> Result<Dispatcher, QueueError> {
        let handler = registry.get(class).ok_or_else(|| QueueError::NoHandler(class.to_string()))?;
        Ok(Dispatcher {
            store,
            class: class.to_string(),
            names: QueueNames::for_class(class),
            handler,
            poll_interval,
            parent,
        })
    }

    pub fn names(&self) -> &QueueNames {
        &self.names
    }

    /// Moves everything left in the work list back to the tail of the queue,
    /// head first. Undecodable records are dropped. Returns how many were requeued.
    pub async fn recover(&self) -> Result<usize, QueueError> {
        let mut recovered = 0;
        while let Some(raw) = self.store.pop(&self.names.work).await? {
            match Job::decode(&raw) {
                Ok(job) => {
                    self.store.push(&self.names.queue, &raw).await?;
                    recovered += 1;
                    warn!("[Queue] Recovered abandoned job {} on {}", job.id, self.store.key(&self.names.queue));
                }
                Err(e) => error!("[Queue] Discarding corrupt record from {}: {} ({})", self.store.key(&self.names.work), e, raw),
            }
        }
        if recovered > 0 {
            info!("[Queue] Requeued {} job(s) for class {}", recovered, self.class);
        }
        Ok(recovered)
    }

    /// Atomically moves the head of the queue to the work list, waiting at most one poll interval.
    pub async fn claim(&self) -> Result<Option<String>, QueueError> {
        Ok(self.store.pop_blocking_rotate(&self.names.queue, &self.names.work, self.poll_interval).await?)
    }

    /// Removes the exact claimed record from the work list.
    pub async fn acknowledge(&self, raw: &str) -> Result<(), QueueError> {
        if !self.store.remove(&self.names.work, raw).await? {
            warn!("[Queue] Acknowledged record was no longer in {}", self.store.key(&self.names.work));
        }
        Ok(())
    }

    /// Decodes and runs one claimed record, then acknowledges it whatever the outcome.
    pub async fn execute(&self, raw: &str) -> Result<DispatchStep, QueueError> {
        let step = match Job::decode(raw) {
            Err(e) => {
                error!("[Queue] Discarding corrupt job from {}: {} ({})", self.store.key(&self.names.queue), e, raw);
                DispatchStep::Discarded
            }
            Ok(job) => {
                info!("[Queue] Running {} job {}", self.class, job.id);
                let outcome = self.handler.handle(&job).await;
                match &outcome {
                    JobOutcome::Success => info!("[Queue] Job {} finished", job.id),
                    JobOutcome::Warnings(warning) => warn!("[Queue] Job {} finished with warnings: {}", job.id, warning),
                    JobOutcome::Failure(code) => error!("[Queue] Job {} failed with code {}", job.id, code),
                }
                DispatchStep::Handled { id: job.id, outcome }
            }
        };
        self.acknowledge(raw).await?;
        Ok(step)
    }

    /// Claims and executes at most one job.
    pub async fn process_next(&self) -> Result<DispatchStep, QueueError> {
        match self.claim().await? {
            Some(raw) => self.execute(&raw).await,
            None => Ok(DispatchStep::Idle),
        }
    }

    /// Crash recovery followed by the claim loop. Returns once the parent
    /// process is gone; store faults are logged and retried after a poll interval.
    pub async fn run(&self) -> Result<(), QueueError> {
        self.recover().await?;
        info!(
            "[Queue] Worker for {} waiting on {}",
            self.class,
            self.store.key(&self.names.queue)
        );

        loop {
            match self.process_next().await {
                Ok(DispatchStep::Idle) => {}
                Ok(_) => continue,
                Err(e) => {
                    error!("[Queue] {} worker: {}", self.class, e);
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
            if !self.parent.is_alive() {
                info!("[Queue] Parent process gone, stopping {} worker", self.class);
                return Ok(());
            }
        }
    }
}
