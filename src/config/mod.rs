//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the seedwatch
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`seedwatch.toml`) contains sections for:
//! - **root**: log level, optional log file, path of the policy (rules) file
//! - **store**: backing store holding the job queues (Redis or in-memory)
//! - **client**: torrent daemon backend and its RPC endpoint
//! - **queue**: job classes served by workers and the claim poll interval
//! - **xfer**: remote transfer destination (SSH host, user, key, base path)
//! - **notify**: presence channel settings
//! - **sentry_config**: error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use seedwatch::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("seedwatch.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
