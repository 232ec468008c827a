//! JSON file-based key-value backend.
//!
//! The whole map lives in memory and is rewritten on every `set` using atomic
//! file writes (write-to-temp + rename), so a crash never leaves a half-written
//! preferences file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "enabledCosts": "[\"Free\",\"Paid\",\"Ticketed\"]",
//!     "enabledLocations": "[\"University Arena\"]"
//!   }
//! }
//! ```
//!
//! Values are kept as the exact strings handed to [`KeyValueStore::set`].

use crate::domain::error::{CampusEventsError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON container written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// Key-value store persisted to a single JSON file.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; the plugin drives it from its single event loop.
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StoreData,
    /// Set when `data` has changes not yet on disk.
    dirty: bool,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty store; nothing is written until the
    /// first `set`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read or is not valid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use campus_events::storage::{JsonFileStore, KeyValueStore};
    ///
    /// let mut store = JsonFileStore::open("/tmp/campus-events/preferences.json")?;
    /// store.set("enabledCosts", r#"["Free"]"#)?;
    /// # Ok::<(), campus_events::CampusEventsError>(())
    /// ```
    pub fn open<P: Into<PathBuf>>(file_path: P) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON preferences file");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preferences file yet, starting empty");
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "JSON store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| CampusEventsError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(
                version = data.version,
                expected = FORMAT_VERSION,
                "unexpected preferences format version"
            );
        }

        Ok(data)
    }

    /// Writes the map to disk if it changed since the last save.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CampusEventsError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences file saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}
