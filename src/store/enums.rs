/// Available backing store engines.
pub mod store_engine;
