use std::time::Duration;
use async_trait::async_trait;
use crate::store::errors::StoreError;

/// Durable FIFO lists addressed by name.
///
/// Every mutation is atomic at the granularity of one element; callers never
/// hold a lock across calls. Names are logical and get the connector prefix.
#[async_trait]
pub trait ListStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    /// Appends `value` to the tail of `list`.
    async fn push(&self, list: &str, value: &str) -> Result<(), StoreError>;

    /// Removes and returns the head of `list`.
    async fn pop(&self, list: &str) -> Result<Option<String>, StoreError>;

    /// Atomically moves the head of `src` to the tail of `dst`, waiting up to
    /// `timeout` for `src` to become non-empty.
    async fn pop_blocking_rotate(
        &self,
        src: &str,
        dst: &str,
        timeout: Duration,
    ) -> Result<Option<String>, StoreError>;

    /// Removes the first element equal to `value`; returns whether one was found.
    async fn remove(&self, list: &str, value: &str) -> Result<bool, StoreError>;

    async fn length(&self, list: &str) -> Result<u64, StoreError>;

    /// Fully qualified key for a logical list name.
    fn key(&self, list: &str) -> String;
}
