use crate::store::enums::store_engine::StoreEngine;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;

#[derive(Debug, Clone)]
pub struct StoreConnector {
    pub(crate) redis: Option<StoreConnectorRedis>,
    pub(crate) memory: Option<StoreConnectorMemory>,
    pub(crate) engine: StoreEngine,
}
