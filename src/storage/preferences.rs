//! Facet allow-list preferences.
//!
//! [`PreferencesStore`] is the single owner of the three facet allow-lists. It
//! loads them once from a [`KeyValueStore`], writes all three keys back after
//! every mutation, and notifies subscribers with the new lists. It is handed to
//! the application state explicitly; there is no global instance.

use crate::domain::error::{CampusEventsError, Result};
use crate::domain::facets::{AllowList, Facet, FacetAllowLists};
use crate::storage::backend::KeyValueStore;
use std::fmt;

/// Handle returned by [`PreferencesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FacetAllowLists) + Send>;

/// Owner of the persisted facet allow-lists.
pub struct PreferencesStore {
    backend: Box<dyn KeyValueStore>,
    current: FacetAllowLists,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PreferencesStore {
    /// Loads allow-lists from `backend`.
    ///
    /// Absent keys fall back to the facet defaults. A value that is not a JSON
    /// array of strings also falls back, with a warning, rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_events::domain::Facet;
    /// use campus_events::storage::{MemoryStore, PreferencesStore};
    ///
    /// let backend = MemoryStore::with_entries([("enabledCosts", r#"["Free"]"#)]);
    /// let prefs = PreferencesStore::load(Box::new(backend))?;
    /// assert_eq!(prefs.get().costs.as_slice(), ["Free"]);
    /// assert_eq!(prefs.get().get(Facet::Category).len(), 5);
    /// # Ok::<(), campus_events::CampusEventsError>(())
    /// ```
    pub fn load(backend: Box<dyn KeyValueStore>) -> Result<Self> {
        let _span = tracing::debug_span!("load_preferences").entered();

        let mut current = FacetAllowLists::default();
        for facet in Facet::ALL {
            if let Some(list) = Self::read_facet(backend.as_ref(), facet)? {
                *current.get_mut(facet) = list;
            }
        }

        tracing::debug!(
            locations = current.locations.len(),
            categories = current.categories.len(),
            costs = current.costs.len(),
            "preferences loaded"
        );

        Ok(Self {
            backend,
            current,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// A store holding the defaults in memory, with nothing persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(super::MemoryStore::default()),
            current: FacetAllowLists::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn read_facet(backend: &dyn KeyValueStore, facet: Facet) -> Result<Option<AllowList>> {
        let Some(raw) = backend.get(facet.storage_key())? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(values) => Ok(Some(AllowList::from(values))),
            Err(e) => {
                tracing::warn!(
                    key = facet.storage_key(),
                    error = %e,
                    "stored allow-list is not a JSON string array, using defaults"
                );
                Ok(None)
            }
        }
    }

    /// Current allow-lists.
    #[must_use]
    pub const fn get(&self) -> &FacetAllowLists {
        &self.current
    }

    /// Replaces all three allow-lists, persists them and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails. The in-memory lists are
    /// updated regardless, so the UI keeps reflecting what the user chose.
    pub fn set(&mut self, lists: FacetAllowLists) -> Result<()> {
        self.current = lists;
        self.persist_and_notify()
    }

    /// Applies `mutate` to a copy of the lists and commits the result if it
    /// differs from the current state. Returns whether anything changed.
    fn update(&mut self, mutate: impl FnOnce(&mut FacetAllowLists)) -> Result<bool> {
        let mut next = self.current.clone();
        mutate(&mut next);
        if next == self.current {
            return Ok(false);
        }
        self.set(next)?;
        Ok(true)
    }

    /// Enables `value` if disabled, disables it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> Result<()> {
        tracing::debug!(facet = ?facet, value = %value, "toggling facet value");
        self.update(|lists| {
            lists.get_mut(facet).toggle(value);
        })
        .map(|_| ())
    }

    /// Enables a value with set-union semantics.
    ///
    /// The value is trimmed first; blank input is ignored. Returns `true` if
    /// the value was newly added.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add(&mut self, facet: Facet, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        tracing::debug!(facet = ?facet, value = %value, "adding facet value");
        self.update(|lists| {
            lists.get_mut(facet).insert(value);
        })
    }

    /// Disables a value. Returns `true` if it was enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove(&mut self, facet: Facet, value: &str) -> Result<bool> {
        tracing::debug!(facet = ?facet, value = %value, "removing facet value");
        self.update(|lists| {
            lists.get_mut(facet).remove(value);
        })
    }

    /// Replaces one facet's allow-list.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_facet<I, S>(&mut self, facet: Facet, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: AllowList = values.into_iter().collect();
        self.update(|lists| *lists.get_mut(facet) = list).map(|_| ())
    }

    /// Restores the default allow-lists for all facets.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        tracing::debug!("resetting preferences to defaults");
        self.set(FacetAllowLists::default())
    }

    /// Registers a listener called with the new lists after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FacetAllowLists) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn persist_and_notify(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("persist_preferences").entered();

        let written = self.persist();

        for (_, listener) in &mut self.listeners {
            listener(&self.current);
        }

        written
    }

    fn persist(&mut self) -> Result<()> {
        for facet in Facet::ALL {
            let json = serde_json::to_string(self.current.get(facet).as_slice()).map_err(|e| {
                CampusEventsError::Storage(format!(
                    "failed to encode {}: {e}",
                    facet.storage_key()
                ))
            })?;
            self.backend.set(facet.storage_key(), &json)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PreferencesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferencesStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
