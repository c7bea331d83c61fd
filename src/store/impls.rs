pub mod store_connector;
pub mod store_connector_memory;
pub mod store_connector_redis;
pub mod store_engine;
