//! Subcommand runners.
//!
//! Each runner takes the parsed [`Commands`](crate::enums::Commands) variant
//! and the loaded configuration, prints its result on stdout and returns the
//! [`ErrorCode`](crate::common::enums::error_code::ErrorCode) the process
//! exits with.

pub mod cli;

pub mod tests;
