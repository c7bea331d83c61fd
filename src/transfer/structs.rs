/// `scp` based transfer.
pub mod scp_transfer;

/// Handler for the `xfer` job class.
pub mod xfer_handler;
