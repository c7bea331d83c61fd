use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::time::Instant;
use crate::store::errors::StoreError;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::traits::list_store::ListStore;

impl StoreConnectorMemory {
    pub fn new(prefix: &str) -> Self {
        Self {
            lists: Arc::new(Mutex::new(HashMap::new())),
            notify: Arc::new(Notify::new()),
            prefix: prefix.to_string(),
        }
    }

    /// Copy of the list contents, head first.
    pub fn snapshot(&self, list: &str) -> Vec<String> {
        let key = self.key(list);
        self.lists.lock().get(&key).map(|l| l.iter().cloned().collect()).unwrap_or_default()
    }

    fn try_rotate(&self, src: &str, dst: &str) -> Option<String> {
        let mut lists = self.lists.lock();
        let value = lists.get_mut(&self.key(src))?.pop_front()?;
        lists.entry(self.key(dst)).or_default().push_back(value.clone());
        Some(value)
    }
}

#[async_trait]
impl ListStore for StoreConnectorMemory {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn push(&self, list: &str, value: &str) -> Result<(), StoreError> {
        self.lists.lock().entry(self.key(list)).or_default().push_back(value.to_string());
        self.notify.notify_waiters();
        Ok(())
    }

    async fn pop(&self, list: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lists.lock().get_mut(&self.key(list)).and_then(|l| l.pop_front()))
    }

    async fn pop_blocking_rotate(
        &self,
        src: &str,
        dst: &str,
        timeout: Duration,
    ) -> Result<Option<String>, StoreError> {
        let deadline = Instant::now() + timeout;
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(value) = self.try_rotate(src, dst) {
                return Ok(Some(value));
            }
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return Ok(self.try_rotate(src, dst));
            }
        }
    }

    async fn remove(&self, list: &str, value: &str) -> Result<bool, StoreError> {
        let mut lists = self.lists.lock();
        let Some(entries) = lists.get_mut(&self.key(list)) else {
            return Ok(false);
        };
        match entries.iter().position(|v| v == value) {
            Some(index) => {
                entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn length(&self, list: &str) -> Result<u64, StoreError> {
        Ok(self.lists.lock().get(&self.key(list)).map(|l| l.len() as u64).unwrap_or(0))
    }

    fn key(&self, list: &str) -> String {
        format!("{}:{}", self.prefix, list)
    }
}
