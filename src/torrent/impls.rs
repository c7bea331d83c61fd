pub mod backend_schema;
pub mod canonical_field;
pub mod deluge_web_client;
pub mod normalizer;
pub mod state_bits;
pub mod torrent_backend;
pub mod torrent_client;
pub mod torrent_info;
pub mod torrent_state;
pub mod torrent_file;
pub mod tracker_entry;
