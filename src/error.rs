//! Error types for MarketMind
//!
//! This module defines the error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for MarketMind operations
///
/// Covers configuration loading, completion provider calls and report
/// export. Lower-level I/O, HTTP and parse failures are wrapped into these
/// with context. None of these are fatal to
/// an interactive session: provider failures are converted to display text at
/// the service boundary (see [`crate::services::safe_complete`]).
#[derive(Error, Debug)]
pub enum MarketMindError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, malformed payloads, etc.)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Missing credentials for provider
    #[error("Missing credentials for provider: {0}")]
    MissingCredentials(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for MarketMind operations
///
/// Uses `anyhow::Error` so callers can attach context while still being able
/// to downcast to [`MarketMindError`].
pub type Result<T> = anyhow::Result<T>;
