//! Backing store module providing durable named lists.
//!
//! The job queues and the presence channel live in a key-value store that
//! exposes list primitives. Every list name is namespaced by the configured
//! prefix (`<prefix>:<name>`), so several deployments can share one server.
//!
//! # Supported Backends
//!
//! - **Redis**: production backend; atomic `BLMOVE` gives the claim step
//! - **Memory**: process-local lists, used for tests and dry runs
//!
//! # Architecture
//!
//! The store layer uses a trait-based design:
//! - `ListStore` trait defines push/pop/blocking-rotate/remove/length
//! - Each backend has its own connector implementation
//! - `StoreConnector` provides unified access
//!
//! Lists have a head (oldest element) and a tail: `push` appends to the
//! tail, `pop` takes from the head and `pop_blocking_rotate` atomically moves
//! the head of one list onto the tail of another.
//!
//! # Example
//!
//! ```rust,ignore
//! use seedwatch::store::structs::store_connector::StoreConnector;
//! use seedwatch::store::traits::list_store::ListStore;
//!
//! let store = StoreConnector::new(&config.store).await?;
//! store.push("queue_xfer", "{...}").await?;
//! ```

/// Store engine enumeration (redis, memory).
pub mod enums;

/// Error types for store operations.
pub mod errors;

/// Implementation blocks for store connectors.
pub mod impls;

/// Data structures for store connections.
pub mod structs;

/// List store trait definitions.
pub mod traits;

/// Unit tests for the store connectors.
pub mod tests;
