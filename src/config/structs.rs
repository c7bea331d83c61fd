//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Backing store connection settings.
pub mod store_config;

/// Torrent daemon connection settings.
pub mod client_config;

/// Job queue and worker settings.
pub mod queue_config;

/// Remote transfer destination.
pub mod transfer_config;

/// Presence channel settings.
pub mod notify_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
