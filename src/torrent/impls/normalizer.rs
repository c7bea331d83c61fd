use log::debug;
use serde_json::{Map, Value};
use crate::torrent::enums::torrent_backend::TorrentBackend;
use crate::torrent::errors::ClientError;
use crate::torrent::schemas::{schema_for, RTORRENT_TRACKER_TYPES};
use crate::torrent::structs::normalizer::Normalizer;
use crate::torrent::structs::state_bits::StateBits;
use crate::torrent::structs::torrent_file::TorrentFile;
use crate::torrent::structs::torrent_info::TorrentInfo;
use crate::torrent::structs::tracker_entry::TrackerEntry;
use crate::torrent::torrent::{percent, tracker_host, tracker_scheme, value_f64, value_i64, value_u64};
use crate::torrent::traits::torrent_daemon::NativePayload;

fn lookup<F: Copy>(table: &[(&str, F)], key: &str) -> Option<F> {
    table.iter().find(|(native, _)| *native == key).map(|(_, field)| *field)
}

fn objects(value: Option<&Value>) -> Option<Vec<&Map<String, Value>>> {
    value?.as_array().map(|items| items.iter().filter_map(Value::as_object).collect())
}

impl Normalizer {
    /// Builds a normalizer after validating the backend's remap tables.
    pub fn new(backend: TorrentBackend) -> Result<Normalizer, ClientError> {
        let schema = schema_for(backend);
        schema.validate()?;
        Ok(Normalizer { schema })
    }

    pub fn backend(&self) -> TorrentBackend {
        self.schema.backend
    }

    pub fn request_fields(&self, full: bool) -> Vec<String> {
        self.schema.request_fields(full)
    }

    /// Converts one native status payload into a canonical record.
    pub fn normalize(&self, native: &NativePayload) -> Result<TorrentInfo, ClientError> {
        if native.is_empty() {
            return Err(ClientError::NotFound(String::from("empty status payload")));
        }

        let mut info = TorrentInfo::default();
        for (key, value) in native {
            match lookup(self.schema.torrent, key) {
                Some(field) => info.apply(field, value),
                None => debug!("[Normalizer] {} has no mapping for {}", self.schema.backend, key),
            }
        }
        if info.hash.is_empty() {
            return Err(ClientError::InvalidPayload(String::from("missing torrent hash")));
        }

        match self.schema.backend {
            TorrentBackend::deluge => self.finish_deluge(&mut info, native),
            TorrentBackend::rtorrent => self.finish_rtorrent(&mut info, native),
        }
        info.derive_common();
        Ok(info)
    }

    fn remap_files(&self, native: &NativePayload) -> Option<Vec<TorrentFile>> {
        let files = objects(native.get("files"))?;
        Some(files.into_iter().enumerate().map(|(position, element)| {
            let mut file = TorrentFile { index: position as u64, ..Default::default() };
            for (key, value) in element {
                if let Some(field) = lookup(self.schema.file, key) {
                    file.apply(field, value);
                }
            }
            file
        }).collect())
    }

    fn remap_trackers(&self, native: &NativePayload) -> Option<Vec<TrackerEntry>> {
        let trackers = objects(native.get("trackers"))?;
        Some(trackers.into_iter().map(|element| {
            let mut tracker = TrackerEntry::default();
            for (key, value) in element {
                if let Some(field) = lookup(self.schema.tracker, key) {
                    tracker.apply(field, value);
                }
            }
            tracker
        }).collect())
    }

    fn finish_deluge(&self, info: &mut TorrentInfo, native: &NativePayload) {
        let file_progress = native.get("file_progress").and_then(Value::as_array);
        let file_priorities = native.get("file_priorities").and_then(Value::as_array);
        info.files = self.remap_files(native).map(|mut files| {
            for (position, file) in files.iter_mut().enumerate() {
                file.progress = file_progress
                    .and_then(|p| p.get(position))
                    .and_then(value_f64)
                    .map(|fraction| fraction * 100.0)
                    .unwrap_or(0.0);
                file.priority = file_priorities.and_then(|p| p.get(position)).and_then(value_i64);
            }
            files
        });

        info.trackers = self.remap_trackers(native).map(|mut trackers| {
            for tracker in trackers.iter_mut() {
                tracker.tracker_type = tracker_scheme(&tracker.url);
                tracker.success_count = None;
                tracker.enabled = true;
            }
            trackers
        });
    }

    fn finish_rtorrent(&self, info: &mut TorrentInfo, native: &NativePayload) {
        let bits = StateBits::from_payload(native);
        info.state = bits.to_state();
        info.ratio = info.ratio.map(|r| r / 1000.0);

        let download_rate = info.download_rate.unwrap_or(0.0);
        info.eta = Some(if bits.complete == 0 && download_rate > 0.0 {
            (info.total_size.saturating_sub(info.completed_size) as f64 / download_rate) as i64
        } else {
            0
        });

        let file_elements = objects(native.get("files"));
        info.files = self.remap_files(native).map(|mut files| {
            for (file, element) in files.iter_mut().zip(file_elements.iter().flatten()) {
                let completed = element.get("f.completed_chunks").and_then(value_u64).unwrap_or(0);
                let chunks = element.get("f.size_chunks").and_then(value_u64).unwrap_or(0);
                file.progress = percent(completed as f64, chunks as f64);
            }
            files
        });

        let tracker_elements = objects(native.get("trackers"));
        info.trackers = self.remap_trackers(native).map(|mut trackers| {
            for (tracker, element) in trackers.iter_mut().zip(tracker_elements.iter().flatten()) {
                tracker.tracker_type = element
                    .get("t.type")
                    .and_then(value_u64)
                    .and_then(|t| RTORRENT_TRACKER_TYPES.get(t as usize).copied().flatten())
                    .map(str::to_string);
            }
            trackers
        });

        if let Some(first) = info.trackers.as_ref().and_then(|t| t.first()) {
            if info.tracker_url.is_none() {
                info.tracker_url = Some(first.url.clone());
            }
            if info.tracker_host.is_none() {
                info.tracker_host = tracker_host(&first.url);
            }
        }
    }
}
