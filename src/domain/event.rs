//! Campus event domain model.
//!
//! A [`CampusEvent`] is an immutable listing. Apart from `time`, `registration`
//! and the facet fields (`category`, `location`, `cost`), every field is display
//! text; in particular `date` is never compared chronologically.

use serde::{Deserialize, Serialize};

/// A single campus event listing.
///
/// Field names serialize in camelCase (`fullDescription`, `costBadge`) in
/// catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    /// Unique, stable identifier.
    pub id: u32,
    pub title: String,
    /// Short blurb shown in listings and matched by search.
    pub description: String,
    /// Long text shown in the detail view.
    pub full_description: String,
    pub category: String,
    /// Free-form display date, e.g. "Thursday, March 14, 2024".
    pub date: String,
    /// Free-form display time, e.g. "8:00 PM - 12:00 AM".
    pub time: String,
    pub location: String,
    pub capacity: String,
    /// One of Free, Paid or Ticketed for the built-in catalog.
    pub cost: String,
    pub cost_badge: String,
    /// Whether sign-up is required.
    pub registration: bool,
    pub image: String,
    #[serde(default)]
    pub duration: String,
}

impl CampusEvent {
    /// Returns the registration requirement as display text.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_events::domain::EventStore;
    ///
    /// let store = EventStore::builtin();
    /// let finals = store.get(1).unwrap();
    /// assert_eq!(finals.registration_label(), "No registration");
    /// ```
    #[must_use]
    pub const fn registration_label(&self) -> &'static str {
        if self.registration {
            "Registration required"
        } else {
            "No registration"
        }
    }
}
