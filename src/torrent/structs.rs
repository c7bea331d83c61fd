/// Canonical torrent record.
pub mod torrent_info;

/// Canonical file entry.
pub mod torrent_file;

/// Canonical tracker entry.
pub mod tracker_entry;

/// Raw state bits reported by bit-only backends.
pub mod state_bits;

/// Remap tables for one backend.
pub mod backend_schema;

/// Native payload normalizer.
pub mod normalizer;

/// Deluge web JSON-RPC transport.
pub mod deluge_web_client;

/// Facade combining a daemon transport with its normalizer.
pub mod torrent_client;
