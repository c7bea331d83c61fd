use async_trait::async_trait;
use log::info;
use crate::notify::errors::NotifyError;
use crate::notify::structs::log_sink::LogSink;
use crate::notify::traits::notification_sink::NotificationSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send_message(&self, to: &str, body: &str) -> Result<(), NotifyError> {
        info!("[Notify] -> {}: {}", to, body);
        Ok(())
    }

    async fn set_status(&self, show: Option<&str>, status: &str) -> Result<(), NotifyError> {
        info!("[Notify] status [{}] {}", show.unwrap_or("available"), status);
        Ok(())
    }
}
