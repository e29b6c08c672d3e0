//! Unified error type for the portale workspace.

use thiserror::Error;

/// Enumerates all error kinds that can occur across portale crates.
///
/// Note that the public client facade never surfaces this type: every
/// request resolves to an [`crate::ApiResult`], with failures carried as a
/// status code and message. `PortaleError` is the currency of the inner
/// layers (storage, configuration, serialization).
#[derive(Debug, Error)]
pub enum PortaleError {
    /// Durable key-value storage failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),
}

// ── Feature-gated From impls ──────────────────────────────────────────────────

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for PortaleError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PortaleError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PortaleError>;
