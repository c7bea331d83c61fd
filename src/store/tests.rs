#[cfg(test)]
mod store_tests {
    mod store_engine_tests {
        use crate::store::enums::store_engine::StoreEngine;

        #[test]
        fn test_store_engine_display() {
            assert_eq!(format!("{}", StoreEngine::redis), "redis");
            assert_eq!(format!("{}", StoreEngine::memory), "memory");
        }

        #[test]
        fn test_store_engine_url_scheme() {
            assert_eq!(StoreEngine::redis.url_scheme(), "redis://");
        }

        #[test]
        fn test_only_redis_is_shared_between_processes() {
            assert!(StoreEngine::redis.is_shared());
            assert!(!StoreEngine::memory.is_shared());
        }

        #[test]
        fn test_store_engine_serialization() {
            assert_eq!(serde_json::to_string(&StoreEngine::redis).unwrap(), "\"redis\"");
            let engine: StoreEngine = serde_json::from_str("\"memory\"").unwrap();
            assert_eq!(engine, StoreEngine::memory);
        }
    }

    mod error_tests {
        use crate::store::errors::StoreError;

        #[test]
        fn test_connection_error_display() {
            let error = StoreError::ConnectionError("failed to connect".to_string());
            assert_eq!(format!("{}", error), "Connection error: failed to connect");
        }

        #[test]
        fn test_operation_error_display() {
            let error = StoreError::OperationError("operation failed".to_string());
            assert_eq!(format!("{}", error), "Operation error: operation failed");
        }
    }

    mod memory_store_tests {
        use std::time::Duration;
        use crate::store::structs::store_connector::StoreConnector;
        use crate::store::structs::store_connector_memory::StoreConnectorMemory;
        use crate::store::traits::list_store::ListStore;

        #[tokio::test]
        async fn test_push_pop_is_fifo() {
            let store = StoreConnectorMemory::new("test");
            store.push("q", "a").await.unwrap();
            store.push("q", "b").await.unwrap();
            assert_eq!(store.length("q").await.unwrap(), 2);
            assert_eq!(store.pop("q").await.unwrap().as_deref(), Some("a"));
            assert_eq!(store.pop("q").await.unwrap().as_deref(), Some("b"));
            assert_eq!(store.pop("q").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_keys_are_prefixed() {
            let store = StoreConnectorMemory::new("seedwatch");
            assert_eq!(store.key("queue_xfer"), "seedwatch:queue_xfer");
        }

        #[tokio::test]
        async fn test_rotate_moves_head_to_tail() {
            let store = StoreConnectorMemory::new("test");
            store.push("src", "one").await.unwrap();
            store.push("src", "two").await.unwrap();
            store.push("dst", "zero").await.unwrap();
            let moved = store.pop_blocking_rotate("src", "dst", Duration::from_millis(10)).await.unwrap();
            assert_eq!(moved.as_deref(), Some("one"));
            assert_eq!(store.snapshot("src"), vec!["two"]);
            assert_eq!(store.snapshot("dst"), vec!["zero", "one"]);
        }

        #[tokio::test]
        async fn test_rotate_times_out_on_empty_list() {
            let store = StoreConnectorMemory::new("test");
            let moved = store.pop_blocking_rotate("src", "dst", Duration::from_millis(20)).await.unwrap();
            assert!(moved.is_none());
            assert_eq!(store.length("dst").await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_rotate_wakes_on_push() {
            let store = StoreConnectorMemory::new("test");
            let waiter = store.clone();
            let handle = tokio::spawn(async move {
                waiter.pop_blocking_rotate("src", "dst", Duration::from_secs(5)).await
            });
            tokio::time::sleep(Duration::from_millis(20)).await;
            store.push("src", "late").await.unwrap();
            let moved = handle.await.unwrap().unwrap();
            assert_eq!(moved.as_deref(), Some("late"));
        }

        #[tokio::test]
        async fn test_remove_only_first_match() {
            let store = StoreConnectorMemory::new("test");
            for value in ["x", "y", "x"] {
                store.push("work", value).await.unwrap();
            }
            assert!(store.remove("work", "x").await.unwrap());
            assert_eq!(store.snapshot("work"), vec!["y", "x"]);
            assert!(!store.remove("work", "missing").await.unwrap());
            assert!(!store.remove("nothing", "x").await.unwrap());
        }

        #[tokio::test]
        async fn test_connector_delegates_to_memory() {
            let memory = StoreConnectorMemory::new("unit");
            let connector = StoreConnector::from_memory(memory.clone());
            connector.ping().await.unwrap();
            connector.push("list", "value").await.unwrap();
            assert_eq!(memory.snapshot("list"), vec!["value"]);
            assert_eq!(connector.key("list"), "unit:list");
        }
    }
}
