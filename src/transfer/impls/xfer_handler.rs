use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use log::{error, info};
use tokio::time::Instant;
use crate::common::common::format_size;
use crate::common::enums::error_code::ErrorCode;
use crate::config::structs::transfer_config::TransferConfig;
use crate::notify::structs::notifier::Notifier;
use crate::queue::enums::job_outcome::JobOutcome;
use crate::queue::structs::job::Job;
use crate::queue::structs::xfer_job::XferJob;
use crate::queue::traits::job_handler::JobHandler;
use crate::torrent::structs::torrent_client::TorrentClient;
use crate::transfer::structs::xfer_handler::XferHandler;
use crate::transfer::traits::transfer::Transfer;
use crate::transfer::transfer::completion_message;

impl XferHandler {
    pub fn new(
        client: TorrentClient,
        transfer: Arc<dyn Transfer>,
        notifier: Notifier,
        config: &TransferConfig,
    ) -> XferHandler {
        XferHandler {
            client,
            transfer,
            notifier,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl JobHandler for XferHandler {
    async fn handle(&self, job: &Job) -> JobOutcome {
        let record: XferJob = match job.payload() {
            Ok(record) => record,
            Err(e) => {
                error!("[Xfer] Job {} is not a transfer job: {}", job.id, e);
                return JobOutcome::Failure(ErrorCode::ProcFail.code());
            }
        };

        let info = match self.client.get_torrent(&record.thash).await {
            Ok(info) => info,
            Err(e) => {
                error!("[Xfer] Could not fetch torrent {}: {}", record.thash, e);
                return JobOutcome::Failure(ErrorCode::HookFail.code());
            }
        };

        if self.config.hostname.is_empty() {
            return JobOutcome::Warnings(format!("no transfer host configured, {} left in place", info.name));
        }
        let Some(local) = info.path.clone() else {
            error!("[Xfer] Torrent {} has no local path", info.hash);
            return JobOutcome::Failure(ErrorCode::HookFail.code());
        };

        info!("[Xfer] Transferring {} ({})", info.name, local);
        self.notifier.status(Some("dnd"), &format!("Transferring {}", info.name)).await;
        self.notifier
            .message(&format!("{} -- Transfer Started ({})", info.name, format_size(info.total_size as f64, false, false).trim()))
            .await;

        let started = Instant::now();
        let result = self.transfer.transfer(Path::new(&local), &self.config.basepath).await;
        let elapsed = started.elapsed();

        match result {
            Ok(bytes) => {
                let message = completion_message(&info.name, bytes, elapsed);
                info!("[Xfer] {}", message);
                self.notifier.message(&message).await;
                self.notifier.status(None, "Ready").await;
                JobOutcome::Success
            }
            Err(e) => {
                error!("[Xfer] Transfer of {} failed: {}", info.name, e);
                self.notifier.message(&format!("{} -- Transfer Failed: {}", info.name, e)).await;
                self.notifier.status(None, "Ready").await;
                JobOutcome::Failure(ErrorCode::MoveFail.code())
            }
        }
    }
}
