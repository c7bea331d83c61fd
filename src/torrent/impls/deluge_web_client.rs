use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::Mutex;
use reqwest::header::{COOKIE, SET_COOKIE};
use serde_json::{json, Value};
use crate::config::structs::client_config::ClientConfig;
use crate::torrent::enums::torrent_backend::TorrentBackend;
use crate::torrent::errors::ClientError;
use crate::torrent::structs::deluge_web_client::DelugeWebClient;
use crate::torrent::traits::torrent_daemon::{NativePayload, TorrentDaemon};

/// Deluge reports an expired or missing session with this error code.
const DELUGE_NOT_AUTHENTICATED: i64 = 1;

impl DelugeWebClient {
    pub fn new(config: &ClientConfig) -> Result<DelugeWebClient, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(DelugeWebClient {
            http,
            url: config.url.clone(),
            password: config.password.clone(),
            session: Arc::new(Mutex::new(None)),
            request_id: Arc::new(AtomicU64::new(1)),
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({ "method": method, "params": params, "id": id });
        let mut request = self.http.post(&self.url).json(&body);
        if let Some(cookie) = self.session.lock().clone() {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        if let Some(cookie) = response.headers().get(SET_COOKIE)
            && let Ok(cookie) = cookie.to_str()
            && let Some(pair) = cookie.split(';').next()
        {
            *self.session.lock() = Some(pair.to_string());
        }

        let reply: Value = response.error_for_status()?.json().await?;
        debug!("[Deluge] {} -> id {}", method, id);
        match reply.get("error") {
            Some(Value::Null) | None => Ok(reply.get("result").cloned().unwrap_or(Value::Null)),
            Some(error) => {
                let message = error.get("message").and_then(Value::as_str).unwrap_or("unknown error").to_string();
                if error.get("code").and_then(Value::as_i64) == Some(DELUGE_NOT_AUTHENTICATED) {
                    return Err(ClientError::AuthError(message));
                }
                Err(ClientError::RpcError { method: method.to_string(), message })
            }
        }
    }

    async fn login(&self) -> Result<(), ClientError> {
        let accepted = self.call("auth.login", json!([self.password])).await?;
        if accepted.as_bool() != Some(true) {
            return Err(ClientError::AuthError(String::from("web UI rejected the password")));
        }
        info!("[Deluge] Logged in to {}", self.url);
        Ok(())
    }

    /// Logs in when there is no session and attaches the web UI to the first daemon if needed.
    async fn ensure_connected(&self) -> Result<(), ClientError> {
        if self.session.lock().is_none() {
            self.login().await?;
        }
        if self.call("web.connected", json!([])).await?.as_bool() == Some(true) {
            return Ok(());
        }

        let hosts = self.call("web.get_hosts", json!([])).await?;
        let host_id = hosts
            .as_array()
            .and_then(|h| h.first())
            .and_then(|h| h.get(0))
            .cloned()
            .ok_or_else(|| ClientError::NotConnected(String::from("web UI knows no daemon hosts")))?;
        self.call("web.connect", json!([host_id])).await?;
        info!("[Deluge] Web UI attached to daemon {}", host_id);
        Ok(())
    }

    /// Runs a daemon call, logging in again once if the session expired.
    async fn call_core(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        self.ensure_connected().await?;
        match self.call(method, params.clone()).await {
            Err(ClientError::AuthError(message)) => {
                warn!("[Deluge] Session rejected ({}), logging in again", message);
                *self.session.lock() = None;
                self.ensure_connected().await?;
                self.call(method, params).await
            }
            other => other,
        }
    }
}

fn into_payload(method: &str, value: Value) -> Result<NativePayload, ClientError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(NativePayload::new()),
        other => Err(ClientError::InvalidPayload(format!("{} returned {}", method, other))),
    }
}

#[async_trait]
impl TorrentDaemon for DelugeWebClient {
    fn backend(&self) -> TorrentBackend {
        TorrentBackend::deluge
    }

    async fn get_torrent_status(&self, id: &str, fields: &[String]) -> Result<NativePayload, ClientError> {
        let result = self.call_core("core.get_torrent_status", json!([id, fields])).await?;
        into_payload("core.get_torrent_status", result)
    }

    async fn get_torrents_status(&self, filter: &NativePayload, fields: &[String]) -> Result<NativePayload, ClientError> {
        let result = self.call_core("core.get_torrents_status", json!([filter, fields])).await?;
        into_payload("core.get_torrents_status", result)
    }

    async fn move_storage(&self, ids: &[String], dest: &str) -> Result<bool, ClientError> {
        let result = self.call_core("core.move_storage", json!([ids, dest])).await?;
        Ok(!matches!(result, Value::Bool(false)))
    }
}
