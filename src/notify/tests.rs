#[cfg(test)]
mod notify_tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use crate::notify::errors::NotifyError;
    use crate::notify::traits::notification_sink::NotificationSink;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn send_message(&self, to: &str, body: &str) -> Result<(), NotifyError> {
            self.events.lock().push(format!("msg {} {}", to, body));
            Ok(())
        }

        async fn set_status(&self, show: Option<&str>, status: &str) -> Result<(), NotifyError> {
            self.events.lock().push(format!("status {:?} {}", show, status));
            Ok(())
        }
    }

    fn sink() -> Arc<RecordingSink> {
        Arc::new(RecordingSink::default())
    }

    mod command_tests {
        use serde_json::json;
        use crate::notify::enums::notify_command::NotifyCommand;

        #[test]
        fn test_wire_shape() {
            let command = NotifyCommand::SendMessage { to: "ops@example.org".to_string(), body: "hi".to_string() };
            assert_eq!(
                serde_json::to_value(&command).unwrap(),
                json!({"method": "send_message", "params": {"to": "ops@example.org", "body": "hi"}})
            );
            let status: NotifyCommand = serde_json::from_value(json!({"method": "set_status", "params": {"status": "Ready"}})).unwrap();
            assert_eq!(status, NotifyCommand::SetStatus { show: None, status: "Ready".to_string() });
        }

        #[test]
        fn test_unknown_method_is_rejected() {
            assert!(serde_json::from_value::<NotifyCommand>(json!({"method": "reboot", "params": {}})).is_err());
        }
    }

    mod notifier_tests {
        use std::sync::Arc;
        use crate::config::structs::notify_config::NotifyConfig;
        use crate::notify::NOTIFY_LIST;
        use crate::notify::structs::notifier::Notifier;
        use crate::store::structs::store_connector_memory::StoreConnectorMemory;

        #[tokio::test]
        async fn test_enabled_notifier_pushes_commands() {
            let store = StoreConnectorMemory::new("test");
            let config = NotifyConfig { enabled: true, sendto: "ops@example.org".to_string() };
            let notifier = Notifier::new(Arc::new(store.clone()), &config);
            notifier.message("started").await;
            notifier.status(Some("dnd"), "busy").await;
            let queued = store.snapshot(NOTIFY_LIST);
            assert_eq!(queued.len(), 2);
            assert!(queued[0].contains("\"send_message\""));
            assert!(queued[1].contains("\"dnd\""));
        }

        #[tokio::test]
        async fn test_disabled_notifier_pushes_nothing() {
            let store = StoreConnectorMemory::new("test");
            let notifier = Notifier::new(Arc::new(store.clone()), &NotifyConfig::default());
            assert!(!notifier.is_enabled());
            notifier.message("ignored").await;
            assert!(store.snapshot(NOTIFY_LIST).is_empty());
        }
    }

    mod relay_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use super::sink;
        use crate::common::structs::parent_watch::ParentWatch;
        use crate::notify::{NOTIFY_LIST, NOTIFY_WORK_LIST};
        use crate::notify::structs::presence_relay::PresenceRelay;
        use crate::store::structs::store_connector_memory::StoreConnectorMemory;
        use crate::store::traits::list_store::ListStore;

        #[tokio::test]
        async fn test_relay_dispatches_and_drops_corrupt() {
            let store = StoreConnectorMemory::new("test");
            store.push(NOTIFY_LIST, r#"{"method":"send_message","params":{"to":"a","body":"b"}}"#).await.unwrap();
            store.push(NOTIFY_LIST, "corrupt").await.unwrap();
            store.push(NOTIFY_LIST, r#"{"method":"set_status","params":{"show":"xa","status":"Ready"}}"#).await.unwrap();

            let recording = sink();
            let relay = PresenceRelay::new(Arc::new(store.clone()), recording.clone(), Duration::from_millis(10), ParentWatch::disabled());
            for _ in 0..3 {
                assert!(relay.relay_next().await.unwrap());
            }
            assert!(!relay.relay_next().await.unwrap());
            assert_eq!(*recording.events.lock(), vec!["msg a b", "status Some(\"xa\") Ready"]);
            assert!(store.snapshot(NOTIFY_WORK_LIST).is_empty());
        }

        #[tokio::test]
        async fn test_relay_recovers_claimed_commands() {
            let store = StoreConnectorMemory::new("test");
            store.push(NOTIFY_WORK_LIST, "pending").await.unwrap();
            let relay = PresenceRelay::new(Arc::new(store.clone()), sink(), Duration::from_millis(10), ParentWatch::disabled());
            assert_eq!(relay.recover().await.unwrap(), 1);
            assert_eq!(store.snapshot(NOTIFY_LIST), vec!["pending"]);
        }

        #[tokio::test]
        async fn test_run_returns_once_parent_is_gone() {
            let store = StoreConnectorMemory::new("test");
            store.push(NOTIFY_WORK_LIST, r#"{"method":"set_status","params":{"show":null,"status":"Ready"}}"#).await.unwrap();
            let recording = sink();
            let relay = PresenceRelay::new(
                Arc::new(store.clone()),
                recording.clone(),
                Duration::from_millis(20),
                ParentWatch { parent: Some(u32::MAX) },
            );

            let finished = tokio::time::timeout(Duration::from_secs(2), relay.run()).await;
            assert!(matches!(finished, Ok(Ok(()))));
            assert_eq!(*recording.events.lock(), vec!["status None Ready"]);
            assert!(store.snapshot(NOTIFY_LIST).is_empty());
            assert!(store.snapshot(NOTIFY_WORK_LIST).is_empty());
        }
    }
}
