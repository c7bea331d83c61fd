use std::path::{Path, PathBuf};
use std::process::Stdio;
use async_trait::async_trait;
use log::{debug, info};
use tokio::process::Command;
use crate::config::structs::transfer_config::TransferConfig;
use crate::transfer::errors::TransferError;
use crate::transfer::structs::scp_transfer::ScpTransfer;
use crate::transfer::traits::transfer::Transfer;
use crate::transfer::transfer::path_size;

const DEFAULT_SSH_PORT: u16 = 22;

impl ScpTransfer {
    pub fn new(config: &TransferConfig) -> ScpTransfer {
        ScpTransfer::with_program("scp", config)
    }

    pub fn with_program(program: &str, config: &TransferConfig) -> ScpTransfer {
        ScpTransfer {
            program: program.to_string(),
            config: config.clone(),
        }
    }

    /// `user@host:remote`, or `host:remote` without a user.
    pub fn target(&self, remote: &str) -> String {
        if self.config.user.is_empty() {
            format!("{}:{}", self.config.hostname, remote)
        } else {
            format!("{}@{}:{}", self.config.user, self.config.hostname, remote)
        }
    }

    pub fn arguments(&self, local: &Path, remote: &str) -> Vec<String> {
        let mut args = vec![String::from("-B"), String::from("-r")];
        if self.config.port != DEFAULT_SSH_PORT {
            args.push(String::from("-P"));
            args.push(self.config.port.to_string());
        }
        if !self.config.keyfile.is_empty() {
            args.push(String::from("-i"));
            args.push(self.config.keyfile.clone());
        }
        args.push(local.to_string_lossy().to_string());
        args.push(self.target(remote));
        args
    }
}

#[async_trait]
impl Transfer for ScpTransfer {
    async fn transfer(&self, local: &Path, remote: &str) -> Result<u64, TransferError> {
        if tokio::fs::symlink_metadata(local).await.is_err() {
            return Err(TransferError::MissingPath(local.display().to_string()));
        }

        let args = self.arguments(local, remote);
        debug!("[Transfer] {} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;
        if !output.status.success() {
            return Err(TransferError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let local: PathBuf = local.to_path_buf();
        let bytes = tokio::task::spawn_blocking(move || path_size(&local))
            .await
            .map_err(|e| TransferError::TaskError(e.to_string()))??;
        info!("[Transfer] Sent {} bytes to {}", bytes, self.target(remote));
        Ok(bytes)
    }
}
