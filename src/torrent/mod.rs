//! Torrent client abstraction.
//!
//! Torrent daemons describe the same torrent with different native schemas.
//! This module owns the canonical [`TorrentInfo`](structs::torrent_info::TorrentInfo)
//! record and the per-backend remap tables that translate native status
//! payloads into it.
//!
//! # Components
//!
//! - `TorrentDaemon`: the RPC contract a daemon transport implements
//! - `Normalizer`: native payload to `TorrentInfo`, driven by static schemas
//! - `DelugeWebClient`: JSON-RPC transport for the Deluge web UI
//! - `TorrentClient`: facade used by the hook and the transfer handler
//!
//! Records are built fresh on every query and never cached.

/// Backend, state and canonical field enumerations.
pub mod enums;

/// Error types for daemon calls and normalization.
pub mod errors;

/// Implementation blocks for torrent records and clients.
pub mod impls;

/// Static native-to-canonical remap tables per backend.
pub mod schemas;

/// Data structures for torrent records and clients.
pub mod structs;

/// Value coercion helpers shared by the normalizer.
pub mod torrent;

/// Daemon RPC trait.
pub mod traits;
