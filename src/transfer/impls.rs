pub mod scp_transfer;
pub mod xfer_handler;
