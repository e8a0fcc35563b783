//! Error types for the dynup system
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for dynup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the dynup system
///
/// Only `Config` is fatal, and only at startup. Every other variant is
/// caught at the cycle boundary, logged, and converted into "skip this
/// cycle, try again next interval".
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures: connect, timeout, non-2xx on the IP echo
    #[error("Network error: {0}")]
    Network(String),

    /// Response body that should have been an IPv4 literal but was not
    #[error("Parse error: {0}")]
    Parse(String),

    /// DNS lookup failures (NXDOMAIN, timeout, server failure)
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// The update provider rejected our credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The update provider refused or garbled the update.
    ///
    /// Raw status and body are carried so operators see exactly what the
    /// provider said; they must never be swallowed before logging.
    #[error("Provider error (status {status}): {body:?}")]
    Provider {
        /// HTTP status code of the update response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// I/O errors (config file reading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization errors (config file parsing)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a resolution error
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a provider error carrying the raw response
    pub fn provider(status: u16, body: impl Into<String>) -> Self {
        Self::Provider {
            status,
            body: body.into(),
        }
    }
}
