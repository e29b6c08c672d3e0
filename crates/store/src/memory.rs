//! In-memory key-value store backed by a `HashMap` behind a `Mutex`.

use async_trait::async_trait;
use portale_types::{KvStore, error::Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`KvStore`] implementation for testing and ephemeral use.
pub struct InMemoryKvStore {
    data: Mutex<HashMap<String, String>>,
}

impl InMemoryKvStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.lock().unwrap().remove(key);
        Ok(())
    }
}
