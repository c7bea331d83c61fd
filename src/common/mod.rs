//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules.
//!
//! # Utilities
//!
//! - Logging setup (fern + log)
//! - Human-readable size and rate formatting
//! - Job identifier clock
//! - Supervising-parent liveness probe
//!
//! # Data Structures
//!
//! - `CustomError` - Free-form error type for boot-time failures
//! - `ParentWatch` - Remembers the supervising process and checks it is alive
//! - `ErrorCode` - Tagged process exit codes
//!
//! # Example
//!
//! ```rust,ignore
//! use seedwatch::common::common::{format_size, job_id_now};
//!
//! assert_eq!(format_size(1536.0, false, false), "1.5 KiB");
//! let id = job_id_now();
//! ```

/// Common data structures (errors, parent watch).
pub mod structs;

/// Process exit codes.
pub mod enums;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
