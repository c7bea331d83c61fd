use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use redis::AsyncConnectionConfig;
use crate::store::errors::StoreError;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;
use crate::store::traits::list_store::ListStore;

/// Extra room on top of the blocking timeout before the client gives up on a reply.
const RESPONSE_MARGIN: Duration = Duration::from_secs(5);

impl StoreConnectorRedis {
    /// Connects to `url`; `block_timeout` is the longest blocking claim the
    /// connection will be asked to wait for.
    pub async fn connect(url: &str, prefix: &str, block_timeout: Duration) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let config = AsyncConnectionConfig::new()
            .set_response_timeout(Some(block_timeout + RESPONSE_MARGIN));
        let connection = client
            .get_multiplexed_async_connection_with_config(&config)
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }
}

#[async_trait]
impl ListStore for StoreConnectorRedis {
    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(())
    }

    async fn push(&self, list: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        let key = self.key(list);
        let length: u64 = redis::cmd("RPUSH")
            .arg(&key)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        debug!("[Redis] RPUSH {} (length {})", key, length);
        Ok(())
    }

    async fn pop(&self, list: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = redis::cmd("LPOP")
            .arg(self.key(list))
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(value)
    }

    async fn pop_blocking_rotate(
        &self,
        src: &str,
        dst: &str,
        timeout: Duration,
    ) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = redis::cmd("BLMOVE")
            .arg(self.key(src))
            .arg(self.key(dst))
            .arg("LEFT")
            .arg("RIGHT")
            .arg(timeout.as_secs_f64())
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        if value.is_some() {
            debug!("[Redis] BLMOVE {} -> {}", self.key(src), self.key(dst));
        }
        Ok(value)
    }

    async fn remove(&self, list: &str, value: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection.clone();
        let removed: i64 = redis::cmd("LREM")
            .arg(self.key(list))
            .arg(1)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(removed > 0)
    }

    async fn length(&self, list: &str) -> Result<u64, StoreError> {
        let mut conn = self.connection.clone();
        let length: u64 = redis::cmd("LLEN")
            .arg(self.key(list))
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(length)
    }

    fn key(&self, list: &str) -> String {
        format!("{}:{}", self.prefix, list)
    }
}
