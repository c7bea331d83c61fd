use serde_json::Value;
use crate::torrent::enums::canonical_field::TrackerField;
use crate::torrent::structs::tracker_entry::TrackerEntry;
use crate::torrent::torrent::{value_bool, value_string, value_u64};

impl TrackerEntry {
    pub fn apply(&mut self, field: TrackerField, value: &Value) {
        match field {
            TrackerField::Url => if let Some(v) = value_string(value) { self.url = v },
            TrackerField::FailCount => self.fail_count = value_u64(value),
            TrackerField::SuccessCount => self.success_count = value_u64(value),
            TrackerField::Enabled => self.enabled = value_bool(value).unwrap_or(false),
        }
    }
}
