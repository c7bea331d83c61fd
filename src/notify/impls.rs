pub mod log_sink;
pub mod notifier;
pub mod notify_command;
pub mod presence_relay;
