//! The static event store.
//!
//! [`EventStore`] holds the ordered, immutable list of listings the filter engine
//! runs over. The store never grows or shrinks after construction, and ids are
//! unique so they can serve as stable keys.

use super::error::{CampusEventsError, Result};
use super::event::CampusEvent;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, immutable sequence of campus events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<CampusEvent>,
}

impl EventStore {
    /// Builds a store from the given events, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CampusEventsError::Catalog`] if two events share an id.
    pub fn from_events(events: Vec<CampusEvent>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CampusEventsError::Catalog(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
        }

        tracing::debug!(event_count = events.len(), "event store built");
        Ok(Self { events })
    }

    /// Loads a store from a JSON file holding an array of events.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// events, or contains duplicate ids.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_catalog", path = ?path).entered();

        let contents = std::fs::read_to_string(path)?;
        let events: Vec<CampusEvent> = serde_json::from_str(&contents)
            .map_err(|e| CampusEventsError::Catalog(format!("failed to parse catalog: {e}")))?;

        Self::from_events(events)
    }

    /// Returns the built-in catalog of eight campus events.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
        }
    }

    /// All events in store order.
    #[must_use]
    pub fn events(&self) -> &[CampusEvent] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CampusEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    description: &str,
    full_description: &str,
    category: &str,
    date: &str,
    time: &str,
    location: &str,
    capacity: &str,
    cost: &str,
    registration: bool,
    image: &str,
    duration: &str,
    cost_badge: &str,
) -> CampusEvent {
    CampusEvent {
        id,
        title: title.to_string(),
        description: description.to_string(),
        full_description: full_description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        capacity: capacity.to_string(),
        cost: cost.to_string(),
        cost_badge: cost_badge.to_string(),
        registration,
        image: image.to_string(),
        duration: duration.to_string(),
    }
}

fn builtin_events() -> Vec<CampusEvent> {
    vec![
        listing(
            1,
            "Basketball Championship Finals",
            "Watch our team compete in the championship finals. Free",
            "Watch our team compete in the championship finals. Free admission for students.",
            "Sports",
            "Thursday, March 14, 2024",
            "7:00 PM",
            "University Arena",
            "5000 max",
            "Free",
            false,
            "/basketball-hoop-outdoor.jpg",
            "2 hours",
            "Free admission",
        ),
        listing(
            2,
            "Student Government Elections",
            "Vote for your student representatives. Multiple voting",
            "Vote for your student representatives. Multiple voting stations available.",
            "Academic",
            "Sunday, March 17, 2024",
            "9:00 AM - 5:00 PM",
            "Student Center",
            "2000 max",
            "Free",
            true,
            "/student-center-classroom-learning.jpg",
            "8 hours",
            "Free",
        ),
        listing(
            3,
            "Drama Club: Romeo & Juliet",
            "Experience Shakespeare's timeless classic performed by",
            "Experience Shakespeare's timeless classic performed by our talented drama club members.",
            "Clubs",
            "Tuesday, March 19, 2024",
            "8:00 PM",
            "Theater Hall",
            "300 max",
            "Ticketed",
            true,
            "/theater-stage-performance-drama.jpg",
            "2 hours 30 minutes",
            "Ticketed",
        ),
        listing(
            4,
            "Spring Formal Dance",
            "Dress to impress for the annual spring formal. Tickets available",
            "Dress to impress for the annual spring formal. Tickets are available now.",
            "Social",
            "Thursday, March 21, 2024",
            "8:00 PM - 12:00 AM",
            "Grand Ballroom",
            "400 max",
            "Paid",
            false,
            "/formal-dance-ballroom-elegant.jpg",
            "4 hours",
            "Tickets Available",
        ),
        listing(
            5,
            "Research Symposium",
            "Undergraduate students present their research projects. Open to",
            "Undergraduate students present their research projects. Open to all campus members.",
            "Academic",
            "Sunday, March 24, 2024",
            "10:00 AM - 4:00 PM",
            "Science Building",
            "150 max",
            "Free",
            true,
            "/research-presentation-university.jpg",
            "6 hours",
            "Free",
        ),
        listing(
            6,
            "Soccer Tournament",
            "Intramural soccer tournament. Teams still needed for",
            "Intramural soccer tournament. Teams still needed for participation.",
            "Sports",
            "Wednesday, March 27, 2024",
            "2:00 PM",
            "Athletic Fields",
            "200 max",
            "Free",
            true,
            "/soccer-tournament-sports-field.jpg",
            "3 hours",
            "Free",
        ),
        listing(
            7,
            "Photography Club Exhibition",
            "Showcase of student photography from this semester.",
            "Showcase of student photography from this semester.",
            "Clubs",
            "Friday, March 29, 2024",
            "6:00 PM - 9:00 PM",
            "Art Gallery",
            "80 max",
            "Free",
            false,
            "/photography-gallery-exhibition-art.jpg",
            "3 hours",
            "Free",
        ),
        listing(
            8,
            "Game Night Social",
            "Board games, video games, and snacks. Perfect way to meet new",
            "Board games, video games, and snacks. Perfect way to meet new friends.",
            "Social",
            "Monday, April 1, 2024",
            "7:00 PM - 11:00 PM",
            "Student Lounge",
            "50 max",
            "Free",
            false,
            "/board-games-game-night-fun.jpg",
            "4 hours",
            "Free",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique_and_ordered() {
        let store = EventStore::builtin();
        let ids: Vec<u32> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(EventStore::from_events(store.events().to_vec()).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut events = EventStore::builtin().events().to_vec();
        events[1].id = 1;
        let err = EventStore::from_events(events).unwrap_err();
        assert!(matches!(err, CampusEventsError::Catalog(_)));
    }
}
