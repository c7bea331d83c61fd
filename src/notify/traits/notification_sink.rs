use async_trait::async_trait;
use crate::notify::errors::NotifyError;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_message(&self, to: &str, body: &str) -> Result<(), NotifyError>;

    async fn set_status(&self, show: Option<&str>, status: &str) -> Result<(), NotifyError>;
}
