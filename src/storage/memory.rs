//! In-memory key-value backend.
//!
//! Clones share the same underlying map, so a test can keep a handle to a store
//! it handed to the preferences store and inspect (or reload from) what was
//! written.

use crate::domain::error::{CampusEventsError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Shared, in-memory string map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| CampusEventsError::Storage(format!("memory store poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key = %key, value_len = value.len(), "memory store write");
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
