//! Presence channel.
//!
//! Workers report progress by pushing [`NotifyCommand`](enums::notify_command::NotifyCommand)
//! records onto `<prefix>:notify_out`. A separate relay process pops them and
//! dispatches each one to a [`NotificationSink`](traits::notification_sink::NotificationSink).
//! Producers never wait on delivery: a failed push is logged and forgotten.

/// Closed set of presence operations.
pub mod enums;

/// Notification error types.
pub mod errors;

/// Implementation blocks for the notifier, relay and sinks.
pub mod impls;

/// Producer, relay and sink structures.
pub mod structs;

/// Sink trait implemented by presence backends.
pub mod traits;

/// Unit tests for the presence channel.
pub mod tests;

/// List carrying outgoing presence commands.
pub const NOTIFY_LIST: &str = "notify_out";

/// Commands claimed by the relay and not yet delivered.
pub const NOTIFY_WORK_LIST: &str = "notify_work";
