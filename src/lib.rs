//! # Seedwatch
//!
//! Post-download automation for a torrent seedbox.
//!
//! ## Overview
//!
//! When the torrent daemon reports a finished download, seedwatch fetches the
//! torrent's status, normalizes it into a backend-independent record,
//! classifies it against an operator-authored policy file, optionally moves
//! the payload on disk and queues a transfer job. Long-running workers claim
//! jobs from a durable list store (Redis) and copy payloads to a remote host.
//!
//! ## Features
//!
//! - **Normalization**: Deluge and rTorrent payloads mapped onto one `TorrentInfo` record
//! - **Policy rules**: regex match/exclude, file/directory flags, inheritable groups, defaults
//! - **Durable queue**: at-least-once delivery with crash recovery of claimed jobs
//! - **Transfers**: `scp` in batch mode with progress notifications
//! - **Supervision**: one worker process per job class, exiting with their supervisor
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seedwatch::config::structs::configuration::Configuration;
//! use seedwatch::rules::structs::rule_book::RuleBook;
//!
//! let config = Configuration::load_from_file("seedwatch.toml", false)?;
//! let rules = RuleBook::load(&config.rules)?;
//! if let Some(matched) = rules.match_torrent(&info) {
//!     println!("{} -> {:?}", matched.name, matched.policy.moveto());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Subcommand runners
//! - [`common`] - Logging setup, formatting helpers, exit codes
//! - [`config`] - Configuration management and TOML parsing
//! - [`hook`] - Completion hook pipeline
//! - [`notify`] - Presence notifications and their relay
//! - [`queue`] - Job queue, dispatcher and crash recovery
//! - [`rules`] - Policy file parsing, matching and resolution
//! - [`store`] - Redis and in-memory list stores
//! - [`torrent`] - Torrent daemon clients and record normalization
//! - [`transfer`] - Remote payload transfer and the `xfer` job handler
//! - [`worker`] - Worker bootstrap and process supervision

/// Subcommand runners for the binary.
pub mod cli;

/// Common utilities and shared functionality.
///
/// Contains logging setup, human-readable size and duration formatting,
/// the job id clock, the parent liveness probe and the process exit codes.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating the TOML configuration file.
pub mod config;

/// Subcommand enumeration.
pub mod enums;

/// Completion hook: fetch, match, relocate and enqueue.
pub mod hook;

/// Presence channel producer, command set and relay.
pub mod notify;

/// Job queue subsystem.
///
/// Producers append jobs to a per-class queue list; a dispatcher claims them
/// by atomically rotating each job onto a work list, runs the registered
/// handler and removes the job afterwards. Jobs left on the work list by a
/// crashed worker are requeued on start-up.
pub mod queue;

/// Rule matching engine over the policy file.
pub mod rules;

/// Backing list store (Redis or in-memory).
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Torrent daemon access and record normalization.
///
/// Static remap tables translate each backend's native field names to the
/// canonical `TorrentInfo` fields; the `TorrentDaemon` trait hides the RPC
/// transport.
pub mod torrent;

/// Remote transfers.
pub mod transfer;

/// Sentry tracing helpers.
pub mod utils;

/// Worker bootstrap and supervision.
pub mod worker;
