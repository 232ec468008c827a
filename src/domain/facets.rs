//! Facet allow-lists.
//!
//! A facet is a filterable dimension of an event (location, category, cost). Each
//! facet has an [`AllowList`] of currently enabled values. An empty allow-list
//! places no restriction on its facet; it does not mean "nothing allowed".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default enabled locations.
pub const DEFAULT_LOCATIONS: [&str; 8] = [
    "University Arena",
    "Student Center",
    "Theater Hall",
    "Grand Ballroom",
    "Science Building",
    "Athletic Fields",
    "Art Gallery",
    "Student Lounge",
];

/// Default enabled categories.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Sports", "Academic", "Social", "Arts", "Clubs"];

/// Default enabled costs.
pub const DEFAULT_COSTS: [&str; 3] = ["Free", "Paid", "Ticketed"];

/// A filterable event dimension with a persisted allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Location,
    Category,
    Cost,
}

impl Facet {
    /// All facets in admin panel order.
    pub const ALL: [Self; 3] = [Self::Location, Self::Category, Self::Cost];

    /// Key under which the facet's allow-list is persisted.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Location => "enabledLocations",
            Self::Category => "enabledCategories",
            Self::Cost => "enabledCosts",
        }
    }

    /// Values enabled when nothing has been persisted yet.
    #[must_use]
    pub fn default_values(self) -> &'static [&'static str] {
        match self {
            Self::Location => &DEFAULT_LOCATIONS,
            Self::Category => &DEFAULT_CATEGORIES,
            Self::Cost => &DEFAULT_COSTS,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Locations",
            Self::Category => "Categories",
            Self::Cost => "Costs",
        }
    }

    /// The facet after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Location => Self::Category,
            Self::Category => Self::Cost,
            Self::Cost => Self::Location,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of enabled values for one facet.
///
/// Insertion order is kept (it is what gets persisted and displayed) and values
/// are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowList {
    values: Vec<String>,
}

impl AllowList {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// The default allow-list for a facet.
    #[must_use]
    pub fn defaults(facet: Facet) -> Self {
        facet.default_values().iter().copied().collect()
    }

    /// Adds a value if absent. Returns `true` if the list changed.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Removes a value. Returns `true` if it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Removes the value if present, otherwise appends it.
    ///
    /// Returns `true` if the value is enabled afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.remove(value) {
            false
        } else {
            self.values.push(value.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Whether `value` passes this allow-list: always true when the list is empty.
    #[must_use]
    pub fn permits(&self, value: &str) -> bool {
        self.values.is_empty() || self.contains(value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl From<Vec<String>> for AllowList {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<AllowList> for Vec<String> {
    fn from(list: AllowList) -> Self {
        list.values
    }
}

/// The three facet allow-lists together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetAllowLists {
    pub locations: AllowList,
    pub categories: AllowList,
    pub costs: AllowList,
}

impl FacetAllowLists {
    /// Allow-lists with no restriction on any facet.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            locations: AllowList::new(),
            categories: AllowList::new(),
            costs: AllowList::new(),
        }
    }

    #[must_use]
    pub const fn get(&self, facet: Facet) -> &AllowList {
        match facet {
            Facet::Location => &self.locations,
            Facet::Category => &self.categories,
            Facet::Cost => &self.costs,
        }
    }

    pub fn get_mut(&mut self, facet: Facet) -> &mut AllowList {
        match facet {
            Facet::Location => &mut self.locations,
            Facet::Category => &mut self.categories,
            Facet::Cost => &mut self.costs,
        }
    }
}

impl Default for FacetAllowLists {
    fn default() -> Self {
        Self {
            locations: AllowList::defaults(Facet::Location),
            categories: AllowList::defaults(Facet::Category),
            costs: AllowList::defaults(Facet::Cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_values_unique() {
        let mut list = AllowList::defaults(Facet::Location);
        assert!(list.insert("New Lab"));
        assert!(!list.insert("New Lab"));
        assert_eq!(list.iter().filter(|v| *v == "New Lab").count(), 1);
        assert_eq!(list.len(), DEFAULT_LOCATIONS.len() + 1);
    }

    #[test]
    fn toggle_removes_then_appends() {
        let mut list = AllowList::defaults(Facet::Cost);
        assert!(!list.toggle("Free"));
        assert_eq!(list.as_slice(), ["Paid", "Ticketed"]);
        assert!(list.toggle("Free"));
        assert_eq!(list.as_slice(), ["Paid", "Ticketed", "Free"]);
    }

    #[test]
    fn empty_list_permits_everything() {
        let list = AllowList::new();
        assert!(list.permits("Anywhere"));
        let list: AllowList = ["Sports"].into_iter().collect();
        assert!(list.permits("Sports"));
        assert!(!list.permits("sports"));
    }

    #[test]
    fn deserializing_drops_duplicates() {
        let list: AllowList = serde_json::from_str(r#"["Free","Free","Paid"]"#).unwrap();
        assert_eq!(list.as_slice(), ["Free", "Paid"]);
    }
}
