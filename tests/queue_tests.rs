mod common;

use std::sync::Arc;
use std::time::Duration;
use serde_json::{json, Map, Value};
use seedwatch::common::structs::parent_watch::ParentWatch;
use seedwatch::queue::enums::dispatch_step::DispatchStep;
use seedwatch::queue::queue::{enqueue, queue_lengths};
use seedwatch::queue::structs::dispatcher::Dispatcher;
use seedwatch::queue::structs::handler_registry::HandlerRegistry;
use seedwatch::store::structs::store_connector::StoreConnector;
use seedwatch::store::structs::store_connector_memory::StoreConnectorMemory;
use seedwatch::store::traits::list_store::ListStore;

fn job(id: &str) -> Map<String, Value> {
    json!({"id": id, "thash": format!("hash{}", id)}).as_object().cloned().unwrap()
}

fn dispatcher(store: Arc<dyn ListStore>, handler: Arc<common::RecordingHandler>) -> Dispatcher {
    let mut registry = HandlerRegistry::new();
    registry.register("xfer", handler);
    Dispatcher::new(store, &registry, "xfer", Duration::from_millis(50), ParentWatch::disabled()).unwrap()
}

#[tokio::test]
async fn test_jobs_are_handled_in_fifo_order() {
    let memory = StoreConnectorMemory::new("test");
    let store: Arc<dyn ListStore> = Arc::new(StoreConnector::from_memory(memory));
    for id in ["1", "2", "3"] {
        enqueue(store.as_ref(), "xfer", job(id)).await.unwrap();
    }

    let handler = Arc::new(common::RecordingHandler::default());
    let dispatcher = dispatcher(store.clone(), handler.clone());
    for _ in 0..3 {
        assert!(matches!(dispatcher.process_next().await.unwrap(), DispatchStep::Handled { .. }));
    }
    assert!(matches!(dispatcher.process_next().await.unwrap(), DispatchStep::Idle));
    assert_eq!(*handler.seen.lock(), vec!["1", "2", "3"]);

    let lengths = queue_lengths(store.as_ref(), "xfer").await.unwrap();
    assert_eq!((lengths.queued, lengths.in_flight), (0, 0));
}

#[tokio::test]
async fn test_crashed_worker_jobs_are_recovered_by_the_next_worker() {
    let memory = StoreConnectorMemory::new("test");
    let store: Arc<dyn ListStore> = Arc::new(memory.clone());
    for id in ["1", "2", "3", "4", "5"] {
        enqueue(store.as_ref(), "xfer", job(id)).await.unwrap();
    }

    let crashed = dispatcher(store.clone(), Arc::new(common::RecordingHandler::default()));
    assert!(crashed.claim().await.unwrap().is_some());
    drop(crashed);
    assert_eq!(memory.snapshot("work_xfer").len(), 1);

    let handler = Arc::new(common::RecordingHandler::default());
    let restarted = dispatcher(store.clone(), handler.clone());
    assert_eq!(restarted.recover().await.unwrap(), 1);
    assert!(memory.snapshot("work_xfer").is_empty());

    while let DispatchStep::Handled { .. } = restarted.process_next().await.unwrap() {}
    let mut seen = handler.seen.lock().clone();
    seen.sort();
    assert_eq!(seen, vec!["1", "2", "3", "4", "5"], "no job may be lost");
}

#[tokio::test]
async fn test_duplicate_jobs_are_both_delivered() {
    let store: Arc<dyn ListStore> = Arc::new(StoreConnectorMemory::new("test"));
    enqueue(store.as_ref(), "xfer", job("7")).await.unwrap();
    enqueue(store.as_ref(), "xfer", job("7")).await.unwrap();

    let handler = Arc::new(common::RecordingHandler::default());
    let dispatcher = dispatcher(store.clone(), handler.clone());
    while let DispatchStep::Handled { .. } = dispatcher.process_next().await.unwrap() {}
    assert_eq!(*handler.seen.lock(), vec!["7", "7"]);
}
