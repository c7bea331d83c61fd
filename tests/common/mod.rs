#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use seedwatch::config::structs::configuration::Configuration;
use seedwatch::queue::enums::job_outcome::JobOutcome;
use seedwatch::queue::structs::job::Job;
use seedwatch::queue::traits::job_handler::JobHandler;
use seedwatch::store::enums::store_engine::StoreEngine;
use seedwatch::torrent::enums::torrent_backend::TorrentBackend;
use seedwatch::torrent::errors::ClientError;
use seedwatch::torrent::traits::torrent_daemon::{NativePayload, TorrentDaemon};

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.store.engine = StoreEngine::memory;
    config.store.prefix = "test".to_string();
    config.queue.poll_interval = 1;
    config.queue.watch_parent = false;
    config
}

pub fn payload(value: Value) -> NativePayload {
    value.as_object().cloned().unwrap_or_default()
}

pub fn deluge_torrent(hash: &str, name: &str, save_path: &str) -> NativePayload {
    payload(json!({
        "hash": hash,
        "name": name,
        "save_path": save_path,
        "total_size": 1000,
        "total_done": 1000,
        "state": "Seeding",
        "tracker_host": "tracker.example.org",
        "files": [{"index": 0, "path": format!("{}/{}.mkv", name, name), "offset": 0, "size": 1000}],
        "file_progress": [1.0],
        "file_priorities": [1],
        "trackers": [{"url": "https://tracker.example.org/announce", "tier": 0}]
    }))
}

/// In-process Deluge stand-in holding native payloads by lower-cased torrent id.
#[derive(Default)]
pub struct FakeDaemon {
    pub torrents: Mutex<HashMap<String, NativePayload>>,
    pub moves: Mutex<Vec<(String, String)>>,
}

impl FakeDaemon {
    pub fn with(torrents: Vec<NativePayload>) -> Arc<FakeDaemon> {
        let daemon = FakeDaemon::default();
        for torrent in torrents {
            let id = torrent.get("hash").and_then(Value::as_str).unwrap_or_default().to_lowercase();
            daemon.torrents.lock().insert(id, torrent);
        }
        Arc::new(daemon)
    }
}

#[async_trait]
impl TorrentDaemon for FakeDaemon {
    fn backend(&self) -> TorrentBackend {
        TorrentBackend::deluge
    }

    async fn get_torrent_status(&self, id: &str, _fields: &[String]) -> Result<NativePayload, ClientError> {
        Ok(self.torrents.lock().get(&id.to_lowercase()).cloned().unwrap_or_default())
    }

    async fn get_torrents_status(&self, _filter: &NativePayload, _fields: &[String]) -> Result<NativePayload, ClientError> {
        Ok(self.torrents.lock().iter().map(|(id, torrent)| (id.clone(), Value::Object(torrent.clone()))).collect())
    }

    async fn move_storage(&self, ids: &[String], dest: &str) -> Result<bool, ClientError> {
        let mut torrents = self.torrents.lock();
        for id in ids {
            let Some(torrent) = torrents.get_mut(&id.to_lowercase()) else {
                return Ok(false);
            };
            torrent.insert("save_path".to_string(), Value::String(dest.to_string()));
            self.moves.lock().push((id.clone(), dest.to_string()));
        }
        Ok(true)
    }
}

/// Records every job id it is handed.
#[derive(Default)]
pub struct RecordingHandler {
    pub seen: Mutex<Vec<String>>,
}

#[async_trait]
impl JobHandler for RecordingHandler {
    async fn handle(&self, job: &Job) -> JobOutcome {
        self.seen.lock().push(job.id.clone());
        JobOutcome::Success
    }
}
