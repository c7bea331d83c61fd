use redis::aio::MultiplexedConnection;

#[derive(Debug, Clone)]
pub struct StoreConnectorRedis {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) prefix: String,
}
