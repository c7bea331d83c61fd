//! Small cross-cutting helpers.

/// Sentry transaction helpers gated on trace logging.
pub mod sentry_tracing;
