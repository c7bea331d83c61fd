use crate::config::structs::transfer_config::TransferConfig;

#[derive(Debug, Clone)]
pub struct ScpTransfer {
    pub(crate) program: String,
    pub(crate) config: TransferConfig,
}
