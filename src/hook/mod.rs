//! Completion hook.
//!
//! Invoked by the torrent daemon when a download finishes. The pipeline is
//! fetch, match against the policy file, relocate when the matched policy
//! names a `moveto`, and enqueue an `xfer` job. The outcome is printed as a
//! single JSON line so the daemon's hook log stays machine-readable.

/// Hook error types and their exit codes.
pub mod errors;

/// Pipeline entry point.
pub mod hook;

pub mod impls;

/// Hook result structure.
pub mod structs;
