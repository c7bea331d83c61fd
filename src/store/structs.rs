//! Store connector structures.

/// Main store connector providing unified interface.
pub mod store_connector;

/// Redis-specific store connector implementation.
pub mod store_connector_redis;

/// In-process store connector implementation.
pub mod store_connector_memory;
