#[cfg(test)]
mod transfer_tests {
    use crate::config::structs::transfer_config::TransferConfig;

    fn remote_config() -> TransferConfig {
        TransferConfig {
            hostname: "archive.example.org".to_string(),
            user: "seed".to_string(),
            port: 2222,
            basepath: "/srv/incoming".to_string(),
            keyfile: "/home/seed/.ssh/id_ed25519".to_string(),
        }
    }

    mod helper_tests {
        use std::time::Duration;
        use crate::transfer::transfer::{completion_message, path_size, transfer_rate};

        #[test]
        fn test_path_size_walks_directories() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("a.bin"), vec![0u8; 100]).unwrap();
            std::fs::create_dir(dir.path().join("sub")).unwrap();
            std::fs::write(dir.path().join("sub").join("b.bin"), vec![0u8; 24]).unwrap();
            assert_eq!(path_size(dir.path()).unwrap(), 124);
            assert_eq!(path_size(&dir.path().join("a.bin")).unwrap(), 100);
            assert!(path_size(&dir.path().join("missing")).is_err());
        }

        #[test]
        fn test_rate_with_zero_elapsed() {
            assert_eq!(transfer_rate(1000, Duration::ZERO), 0.0);
            assert_eq!(transfer_rate(1000, Duration::from_secs(4)), 250.0);
        }

        #[test]
        fn test_completion_message() {
            let message = completion_message("Show.S01E02", 2048, Duration::from_secs(2));
            assert_eq!(
                message,
                "Show.S01E02 -- Transfer Complete (2.0 KiB) -- Time Elapsed ( 0:00:02 ) -- Rate [ 1.0 KiB/sec | 8.0 Kbps ]"
            );
        }
    }

    mod scp_tests {
        use std::path::Path;
        use crate::config::structs::transfer_config::TransferConfig;
        use crate::transfer::errors::TransferError;
        use crate::transfer::structs::scp_transfer::ScpTransfer;
        use crate::transfer::traits::transfer::Transfer;
        use super::remote_config;

        #[test]
        fn test_arguments() {
            let scp = ScpTransfer::new(&remote_config());
            assert_eq!(
                scp.arguments(Path::new("/data/Show"), "/srv/incoming"),
                vec!["-B", "-r", "-P", "2222", "-i", "/home/seed/.ssh/id_ed25519", "/data/Show", "seed@archive.example.org:/srv/incoming"]
            );
        }

        #[test]
        fn test_arguments_with_defaults() {
            let config = TransferConfig { hostname: "nas".to_string(), ..TransferConfig::default() };
            let scp = ScpTransfer::new(&config);
            assert_eq!(scp.arguments(Path::new("/data/x"), "media"), vec!["-B", "-r", "/data/x", "nas:media"]);
        }

        #[tokio::test]
        async fn test_successful_command_reports_local_size() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("payload.bin"), vec![0u8; 64]).unwrap();
            let scp = ScpTransfer::with_program("true", &remote_config());
            assert_eq!(scp.transfer(dir.path(), "/srv/incoming").await.unwrap(), 64);
        }

        #[tokio::test]
        async fn test_failing_command() {
            let dir = tempfile::tempdir().unwrap();
            let scp = ScpTransfer::with_program("false", &remote_config());
            assert!(matches!(scp.transfer(dir.path(), "/srv/incoming").await, Err(TransferError::CommandFailed { .. })));
        }

        #[tokio::test]
        async fn test_missing_local_path() {
            let scp = ScpTransfer::with_program("true", &remote_config());
            let result = scp.transfer(Path::new("/nonexistent/seedwatch/payload"), "/srv").await;
            assert!(matches!(result, Err(TransferError::MissingPath(_))));
        }
    }

    mod xfer_handler_tests {
        use std::path::{Path, PathBuf};
        use std::sync::Arc;
        use async_trait::async_trait;
        use parking_lot::Mutex;
        use serde_json::{json, Map, Value};
        use crate::config::structs::notify_config::NotifyConfig;
        use crate::config::structs::transfer_config::TransferConfig;
        use crate::notify::NOTIFY_LIST;
        use crate::notify::structs::notifier::Notifier;
        use crate::queue::enums::job_outcome::JobOutcome;
        use crate::queue::structs::job::Job;
        use crate::queue::traits::job_handler::JobHandler;
        use crate::store::structs::store_connector_memory::StoreConnectorMemory;
        use crate::torrent::enums::torrent_backend::TorrentBackend;
        use crate::torrent::errors::ClientError;
        use crate::torrent::structs::torrent_client::TorrentClient;
        use crate::torrent::traits::torrent_daemon::MockTorrentDaemon;
        use crate::transfer::errors::TransferError;
        use crate::transfer::structs::xfer_handler::XferHandler;
        use crate::transfer::traits::transfer::Transfer;
        use super::remote_config;

        struct FakeTransfer {
            calls: Mutex<Vec<(PathBuf, String)>>,
            fail: bool,
        }

        #[async_trait]
        impl Transfer for FakeTransfer {
            async fn transfer(&self, local: &Path, remote: &str) -> Result<u64, TransferError> {
                self.calls.lock().push((local.to_path_buf(), remote.to_string()));
                if self.fail {
                    return Err(TransferError::MissingPath(local.display().to_string()));
                }
                Ok(2000)
            }
        }

        fn fake(fail: bool) -> Arc<FakeTransfer> {
            Arc::new(FakeTransfer { calls: Mutex::new(Vec::new()), fail })
        }

        fn client(found: bool) -> TorrentClient {
            let mut daemon = MockTorrentDaemon::new();
            daemon.expect_backend().return_const(TorrentBackend::deluge);
            daemon.expect_get_torrent_status().returning(move |id, _| {
                if !found {
                    return Err(ClientError::NotFound(id.to_string()));
                }
                let payload: Map<String, Value> = json!({
                    "hash": id,
                    "name": "Show.S01E02",
                    "save_path": "/data/complete",
                    "total_size": 2000,
                    "total_done": 2000,
                    "state": "Seeding"
                }).as_object().cloned().unwrap();
                Ok(payload)
            });
            TorrentClient::new(Arc::new(daemon)).unwrap()
        }

        fn job(thash: &str) -> Job {
            let payload = json!({"id": "1", "thash": thash, "opts": {"rule": "tv"}});
            Job::from_payload(payload.as_object().cloned().unwrap()).unwrap()
        }

        fn notifier(store: &StoreConnectorMemory) -> Notifier {
            let config = NotifyConfig { enabled: true, sendto: "ops@example.org".to_string() };
            Notifier::new(Arc::new(store.clone()), &config)
        }

        #[tokio::test]
        async fn test_successful_transfer() {
            let store = StoreConnectorMemory::new("test");
            let transfer = fake(false);
            let handler = XferHandler::new(client(true), transfer.clone(), notifier(&store), &remote_config());

            assert_eq!(handler.handle(&job("abc")).await, JobOutcome::Success);
            let calls = transfer.calls.lock().clone();
            assert_eq!(calls, vec![(PathBuf::from("/data/complete/Show.S01E02"), "/srv/incoming".to_string())]);

            let sent = store.snapshot(NOTIFY_LIST);
            assert_eq!(sent.len(), 4);
            assert!(sent[0].contains("Transferring Show.S01E02"));
            assert!(sent[1].contains("Transfer Started"));
            assert!(sent[2].contains("Show.S01E02 -- Transfer Complete (2.0 KiB)"));
            assert!(sent[3].contains("Ready"));
        }

        #[tokio::test]
        async fn test_missing_torrent_fails_with_hook_code() {
            let store = StoreConnectorMemory::new("test");
            let transfer = fake(false);
            let handler = XferHandler::new(client(false), transfer.clone(), notifier(&store), &remote_config());
            assert_eq!(handler.handle(&job("gone")).await, JobOutcome::Failure(101));
            assert!(transfer.calls.lock().is_empty());
        }

        #[tokio::test]
        async fn test_transfer_failure_fails_with_move_code() {
            let store = StoreConnectorMemory::new("test");
            let handler = XferHandler::new(client(true), fake(true), notifier(&store), &remote_config());
            assert_eq!(handler.handle(&job("abc")).await, JobOutcome::Failure(102));
            let sent = store.snapshot(NOTIFY_LIST);
            assert!(sent.iter().any(|m| m.contains("Transfer Failed")));
        }

        #[tokio::test]
        async fn test_no_host_is_a_warning() {
            let transfer = fake(false);
            let handler = XferHandler::new(client(true), transfer.clone(), Notifier::disabled(), &TransferConfig::default());
            assert!(matches!(handler.handle(&job("abc")).await, JobOutcome::Warnings(_)));
            assert!(transfer.calls.lock().is_empty());
        }

        #[tokio::test]
        async fn test_payload_without_hash_fails() {
            let handler = XferHandler::new(client(true), fake(false), Notifier::disabled(), &remote_config());
            let job = Job::from_payload(json!({"id": "2", "other": 1}).as_object().cloned().unwrap()).unwrap();
            assert_eq!(handler.handle(&job).await, JobOutcome::Failure(100));
        }
    }
}
