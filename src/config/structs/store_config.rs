use crate::store::enums::store_engine::StoreEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConfig {
    pub engine: StoreEngine,
    pub address: String,
    pub database: i64,
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            engine: StoreEngine::redis,
            address: "127.0.0.1:6379".to_string(),
            database: 11,
            prefix: "seedwatch".to_string(),
        }
    }
}
