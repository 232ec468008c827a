//! Event matching.
//!
//! [`filter_events`] keeps the events that satisfy every active predicate, in
//! store order. Nine predicates are combined with logical AND:
//!
//! ```text
//! search            title | description | location contains query (case-insensitive)
//! location/category/cost allow-lists   empty list, or membership
//! category/location/cost dropdowns     unset, or exact (case-sensitive) equality
//! time dropdown     unset, or classify(time) equals the selection
//! registration      unset, or the event's flag agrees with the selection
//! ```
//!
//! The date range dropdown is not consulted: it only contributes to the
//! applied-filter count.

use crate::domain::{classify, CampusEvent, DropdownFilters, FacetAllowLists};

/// Everything a filter pass reads besides the events themselves.
#[derive(Debug, Clone, Copy)]
pub struct FilterQuery<'a> {
    /// Free-text query; empty matches everything.
    pub search: &'a str,
    pub allow_lists: &'a FacetAllowLists,
    pub dropdowns: &'a DropdownFilters,
}

impl<'a> FilterQuery<'a> {
    #[must_use]
    pub const fn new(
        search: &'a str,
        allow_lists: &'a FacetAllowLists,
        dropdowns: &'a DropdownFilters,
    ) -> Self {
        Self {
            search,
            allow_lists,
            dropdowns,
        }
    }

    /// Whether a single event satisfies every predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_events::domain::{DropdownFilters, EventStore, FacetAllowLists, RegistrationFilter, Selection};
    /// use campus_events::filter::FilterQuery;
    ///
    /// let store = EventStore::builtin();
    /// let lists = FacetAllowLists::default();
    /// let dropdowns = DropdownFilters {
    ///     registration: Selection::Specific(RegistrationFilter::Required),
    ///     ..DropdownFilters::default()
    /// };
    /// let query = FilterQuery::new("SOCCER", &lists, &dropdowns);
    ///
    /// assert!(query.matches(store.get(6).unwrap()));
    /// assert!(!query.matches(store.get(1).unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, event: &CampusEvent) -> bool {
        let needle = self.search.to_lowercase();
        self.matches_with_needle(event, &needle)
    }

    fn matches_with_needle(&self, event: &CampusEvent, needle: &str) -> bool {
        let lists = self.allow_lists;
        let dropdowns = self.dropdowns;

        matches_search(event, needle)
            && lists.locations.permits(&event.location)
            && lists.categories.permits(&event.category)
            && lists.costs.permits(&event.cost)
            && dropdowns.category.admits(|c| *c == event.category)
            && dropdowns.location.admits(|l| *l == event.location)
            && dropdowns.cost.admits(|c| *c == event.cost)
            && dropdowns.time.admits(|t| classify(&event.time) == *t)
            && dropdowns.registration.admits(|r| r.admits(event.registration))
    }
}

/// Case-insensitive substring search over title, description and location.
///
/// `needle` must already be lowercased.
#[must_use]
pub fn matches_search(event: &CampusEvent, needle: &str) -> bool {
    needle.is_empty()
        || event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
        || event.location.to_lowercase().contains(needle)
}

/// Returns the events matching `query`, preserving their relative order.
///
/// # Examples
///
/// ```
/// use campus_events::domain::{DropdownFilters, EventStore, FacetAllowLists};
/// use campus_events::filter::{filter_events, FilterQuery};
///
/// let store = EventStore::builtin();
/// let lists = FacetAllowLists::default();
/// let dropdowns = DropdownFilters::default();
///
/// let hits = filter_events(store.events(), &FilterQuery::new("soccer", &lists, &dropdowns));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Soccer Tournament");
/// ```
#[must_use]
pub fn filter_events<'e>(events: &'e [CampusEvent], query: &FilterQuery<'_>) -> Vec<&'e CampusEvent> {
    matching_indices(events, query)
        .into_iter()
        .map(|i| &events[i])
        .collect()
}

/// Same as [`filter_events`], returning positions into `events` instead.
#[must_use]
pub fn matching_indices(events: &[CampusEvent], query: &FilterQuery<'_>) -> Vec<usize> {
    let _span = tracing::debug_span!(
        "filter_events",
        total_events = events.len(),
        query_len = query.search.len(),
        dropdowns_applied = query.dropdowns.applied_count()
    )
    .entered();

    let needle = query.search.to_lowercase();

    let indices: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| query.matches_with_needle(event, &needle))
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(matched = indices.len(), "filter applied");
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventStore, RegistrationFilter, Selection, TimeOfDay};

    #[test]
    fn search_checks_location_too() {
        let store = EventStore::builtin();
        let lists = FacetAllowLists::default();
        let dropdowns = DropdownFilters::default();
        let hits = filter_events(store.events(), &FilterQuery::new("ARENA", &lists, &dropdowns));
        let ids: Vec<u32> = hits.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn full_description_is_not_searched() {
        let store = EventStore::builtin();
        let lists = FacetAllowLists::default();
        let dropdowns = DropdownFilters::default();
        // Only in fullDescription of event 1.
        let hits = filter_events(store.events(), &FilterQuery::new("admission", &lists, &dropdowns));
        assert!(hits.is_empty());
    }

    #[test]
    fn dropdowns_combine() {
        let store = EventStore::builtin();
        let lists = FacetAllowLists::default();
        let dropdowns = DropdownFilters {
            time: Selection::Specific(TimeOfDay::Evening),
            registration: Selection::Specific(RegistrationFilter::NotRequired),
            ..DropdownFilters::default()
        };
        let ids: Vec<u32> = filter_events(store.events(), &FilterQuery::new("", &lists, &dropdowns))
            .iter()
            .map(|e| e.id)
            .collect();
        // Event 4 ("8:00 PM - 12:00 AM") classifies as Morning.
        assert_eq!(ids, vec![1, 7, 8]);
    }

    #[test]
    fn dropdown_equality_is_case_sensitive() {
        let store = EventStore::builtin();
        let lists = FacetAllowLists::default();
        let dropdowns = DropdownFilters {
            cost: Selection::Specific("free".to_string()),
            ..DropdownFilters::default()
        };
        assert!(matching_indices(store.events(), &FilterQuery::new("", &lists, &dropdowns)).is_empty());
    }
}
