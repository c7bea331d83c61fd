pub mod notify_command;
