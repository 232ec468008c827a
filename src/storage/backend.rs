//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait the preferences store
//! persists through. Values are opaque strings (the preferences store writes
//! JSON-encoded string arrays), so any backend that can keep strings by key
//! works: the in-memory [`MemoryStore`](crate::storage::MemoryStore) for tests
//! and start-up, or [`JsonFileStore`](crate::storage::JsonFileStore) on disk.

use crate::domain::error::Result;

/// A string key-value store with get/set semantics.
///
/// Writes are last-write-wins; there is a single writer.
///
/// # Examples
///
/// ```
/// use campus_events::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("enabledCosts", r#"["Free"]"#)?;
/// assert_eq!(store.get("enabledCosts")?.as_deref(), Some(r#"["Free"]"#));
/// assert_eq!(store.get("missing")?, None);
/// # Ok::<(), campus_events::CampusEventsError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
