//! Payload transfer.
//!
//! [`Transfer`](traits::transfer::Transfer) copies a local payload to the
//! configured remote destination. [`ScpTransfer`](structs::scp_transfer::ScpTransfer)
//! shells out to `scp` in batch mode. The `xfer` job handler
//! ([`XferHandler`](structs::xfer_handler::XferHandler)) ties the queue to it:
//! re-fetch the torrent, copy it, report progress on the presence channel.

/// Transfer error types.
pub mod errors;

/// Implementation blocks for transfers and the xfer handler.
pub mod impls;

/// Transfer and handler structures.
pub mod structs;

/// Size walking and progress message helpers.
pub mod transfer;

/// Transfer mechanism trait.
pub mod traits;

/// Unit tests for transfers and the xfer handler.
pub mod tests;
