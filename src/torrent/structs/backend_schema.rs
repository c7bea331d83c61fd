use crate::torrent::enums::canonical_field::{CanonicalField, FileField, TrackerField};
use crate::torrent::enums::torrent_backend::TorrentBackend;

/// Native-to-canonical remap tables for one backend.
///
/// Native keys absent from a table have no canonical mapping and are dropped.
#[derive(Debug)]
pub struct BackendSchema {
    pub backend: TorrentBackend,
    pub torrent: &'static [(&'static str, CanonicalField)],
    pub file: &'static [(&'static str, FileField)],
    pub tracker: &'static [(&'static str, TrackerField)],
    /// Native keys read by derivation steps rather than remapped.
    pub derived_inputs: &'static [&'static str],
    /// Native keys that carry file and tracker detail.
    pub detail_fields: &'static [&'static str],
}
