//! Utility modules.

/// Lenient deserializers for database-shaped rows.
pub mod serde_helpers;

/// Log sanitization utilities to keep response bodies out of log lines.
pub mod log_sanitizer;
