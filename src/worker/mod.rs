//! Worker bootstrap and process supervision.
//!
//! A worker owns one job class: it connects the store and the torrent
//! client, registers the handlers, recovers jobs left claimed by a crashed
//! predecessor and then dispatches until its parent goes away.
//! [`supervise`](worker::supervise) starts one worker process per configured
//! class, plus the presence relay when notifications are enabled.

/// Worker error types.
pub mod errors;

/// Worker, relay and supervisor entry points.
pub mod worker;
