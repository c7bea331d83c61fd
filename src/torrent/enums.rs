/// Supported torrent daemons.
pub mod torrent_backend;

/// Canonical torrent lifecycle state.
pub mod torrent_state;

/// Canonical field names targeted by the remap tables.
pub mod canonical_field;
