use serde_json::Value;
use crate::torrent::enums::canonical_field::FileField;
use crate::torrent::structs::torrent_file::TorrentFile;
use crate::torrent::torrent::{value_i64, value_string, value_u64};

impl TorrentFile {
    pub fn apply(&mut self, field: FileField, value: &Value) {
        match field {
            FileField::Path => if let Some(v) = value_string(value) { self.path = v },
            FileField::Index => if let Some(v) = value_u64(value) { self.index = v },
            FileField::Offset => if let Some(v) = value_u64(value) { self.offset = v },
            FileField::Size => if let Some(v) = value_u64(value) { self.size = v },
            FileField::Priority => self.priority = value_i64(value),
        }
    }
}
