//! Storage trait shared across portale crates.

use crate::error::Result;
use async_trait::async_trait;

/// Durable string key-value storage.
///
/// The session layer owns which keys exist and what they hold; backends only
/// move strings. Implementations must tolerate concurrent independent key
/// access; no cross-key transaction is required. Two writers racing on the
/// same key resolve last-write-wins.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Write (or overwrite) `value` under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
    /// Delete `key`; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
