//! Error handling for vantage-core.
//!
//! Errors are split into two tiers. Per-cell fetch failures (transport,
//! timeout, status, decode, invalid endpoint) never appear here: the
//! dispatcher recovers them locally into error-flagged cell content (see
//! [`crate::overview::FetchError`]). This type covers the structural
//! failures that are fatal at startup — a configuration that cannot be
//! loaded or cannot produce a grid at all.

use thiserror::Error;

/// A specialized Result type for vantage operations.
pub type Result<T> = std::result::Result<T, VantageError>;

#[derive(Debug, Error)]
pub enum VantageError {
    /// The configuration cannot produce a grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration sources could not be read or deserialized.
    #[error("could not load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}
