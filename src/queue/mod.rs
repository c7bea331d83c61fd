//! Job Queue Subsystem.
//!
//! Each job class owns two lists in the backing store:
//!
//! - `<prefix>:queue_<class>`: pending jobs, oldest at the head
//! - `<prefix>:work_<class>`: jobs claimed by a worker and not yet acknowledged
//!
//! Producers call [`enqueue`](queue::enqueue). A worker runs a
//! [`Dispatcher`](structs::dispatcher::Dispatcher): it first requeues anything
//! left in the work list by a previous crash, then repeatedly claims the
//! head of the queue (atomically moving it to the work list), hands it to the
//! registered [`JobHandler`](traits::job_handler::JobHandler) and removes it
//! from the work list once the handler returns.
//!
//! Delivery is at-least-once. A worker that dies between running a handler
//! and acknowledging the job will see that job again after restart.

/// Handler outcome and dispatch step enumerations.
pub mod enums;

/// Queue error types.
pub mod errors;

/// Implementation blocks for jobs and the dispatcher.
pub mod impls;

/// Producer-side operations.
pub mod queue;

/// Job records, list names and the dispatcher.
pub mod structs;

/// Job handler trait.
pub mod traits;
