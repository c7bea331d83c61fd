/// Producer side of the presence channel.
pub mod notifier;

/// Consumer that forwards commands to a sink.
pub mod presence_relay;

/// Sink writing presence traffic to the log.
pub mod log_sink;
