//! Persistence for facet allow-list preferences.
//!
//! Preferences are kept as JSON-encoded string arrays under three fixed keys
//! in a string key-value store. The store starts in memory and is swapped for
//! the on-disk backend once the plugin is allowed to touch the filesystem.
//!
//! # Modules
//!
//! - `backend`: Key-value store trait
//! - `memory`: In-memory backend for start-up and tests
//! - `json`: JSON file backend with atomic writes
//! - `preferences`: Allow-list owner with change notification

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::{PreferencesStore, SubscriptionId};
