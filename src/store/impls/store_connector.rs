use std::time::Duration;
use async_trait::async_trait;
use log::info;
use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_engine::StoreEngine;
use crate::store::errors::StoreError;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;
use crate::store::traits::list_store::ListStore;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

impl StoreConnector {
    pub async fn new(config: &StoreConfig, block_timeout: Duration) -> Result<StoreConnector, StoreError> {
        let transaction = start_trace_transaction("store_init", "store");
        let result: Result<StoreConnector, StoreError> = match config.engine {
            StoreEngine::redis => {
                let connection_url = format!("{}{}/{}", config.engine.url_scheme(), config.address, config.database);
                let redis_connector = StoreConnectorRedis::connect(&connection_url, &config.prefix, block_timeout).await?;
                info!("[Store] Connected to Redis at {} (db {})", config.address, config.database);
                Ok(StoreConnector {
                    redis: Some(redis_connector),
                    memory: None,
                    engine: StoreEngine::redis,
                })
            }
            StoreEngine::memory => {
                info!("[Store] Using in-process memory lists");
                Ok(StoreConnector::from_memory(StoreConnectorMemory::new(&config.prefix)))
            }
        };
        finish_trace_transaction(transaction, &result, &[("engine", config.engine.to_string())]);
        result
    }

    pub fn from_memory(memory: StoreConnectorMemory) -> StoreConnector {
        StoreConnector {
            redis: None,
            memory: Some(memory),
            engine: StoreEngine::memory,
        }
    }

    pub fn engine(&self) -> StoreEngine {
        self.engine
    }

    pub fn backend(&self) -> Result<&dyn ListStore, StoreError> {
        match self.engine {
            StoreEngine::redis => self.redis.as_ref()
                .map(|r| r as &dyn ListStore)
                .ok_or_else(|| StoreError::ConnectionError("Redis not connected".to_string())),
            StoreEngine::memory => self.memory.as_ref()
                .map(|m| m as &dyn ListStore)
                .ok_or_else(|| StoreError::ConnectionError("Memory store not initialized".to_string())),
        }
    }
}

#[async_trait]
impl ListStore for StoreConnector {
    async fn ping(&self) -> Result<(), StoreError> {
        let transaction = start_trace_transaction("store_ping", "store");
        let result = match self.backend() {
            Ok(backend) => backend.ping().await,
            Err(e) => Err(e),
        };
        finish_trace_transaction(transaction, &result, &[("engine", self.engine.to_string())]);
        result
    }

    async fn push(&self, list: &str, value: &str) -> Result<(), StoreError> {
        self.backend()?.push(list, value).await
    }

    async fn pop(&self, list: &str) -> Result<Option<String>, StoreError> {
        self.backend()?.pop(list).await
    }

    async fn pop_blocking_rotate(
        &self,
        src: &str,
        dst: &str,
        timeout: Duration,
    ) -> Result<Option<String>, StoreError> {
        self.backend()?.pop_blocking_rotate(src, dst, timeout).await
    }

    async fn remove(&self, list: &str, value: &str) -> Result<bool, StoreError> {
        self.backend()?.remove(list, value).await
    }

    async fn length(&self, list: &str) -> Result<u64, StoreError> {
        self.backend()?.length(list).await
    }

    fn key(&self, list: &str) -> String {
        match self.backend() {
            Ok(backend) => backend.key(list),
            Err(_) => list.to_string(),
        }
    }
}
