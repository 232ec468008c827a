//! Single-select dropdown filter state.
//!
//! Each dropdown is a [`Selection`]: either [`Selection::Unset`] (the "All ..."
//! choice) or one concrete value. Keeping the sentinel out of the value space
//! means a category literally named "All Events" can never be mistaken for the
//! no-op choice.

use super::facets::{DEFAULT_CATEGORIES, DEFAULT_COSTS, DEFAULT_LOCATIONS};
use super::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dropdown choice: no filter, or one specific value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    Unset,
    Specific(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Selection<T> {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Specific(_))
    }

    /// True when unset, otherwise the result of `predicate` on the selected value.
    pub fn admits(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Unset => true,
            Self::Specific(value) => predicate(value),
        }
    }

    #[must_use]
    pub const fn as_specific(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Specific(value) => Some(value),
        }
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Steps through `Unset` followed by `options`, wrapping at both ends.
    ///
    /// A current value that is not among `options` steps to the first (forward)
    /// or last (backward) option.
    #[must_use]
    pub fn cycle(&self, options: &[T], forward: bool) -> Self {
        if options.is_empty() {
            return Self::Unset;
        }

        let position = match self {
            Self::Unset => None,
            Self::Specific(value) => Some(options.iter().position(|o| o == value)),
        };

        let next = match position {
            // Unset, or a value with no slot among the options.
            None | Some(None) => Some(if forward { 0 } else { options.len() - 1 }),
            Some(Some(i)) if forward => (i + 1 < options.len()).then_some(i + 1),
            Some(Some(i)) => i.checked_sub(1),
        };

        next.map_or(Self::Unset, |i| Self::Specific(options[i].clone()))
    }
}

/// Date range choices. Selectable and counted, but never used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    ThisWeek,
    ThisMonth,
    NextMonth,
}

impl DateRange {
    pub const ALL: [Self; 3] = [Self::ThisWeek, Self::ThisMonth, Self::NextMonth];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::NextMonth => "Next Month",
        }
    }
}

/// Registration dropdown choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationFilter {
    Required,
    NotRequired,
}

impl RegistrationFilter {
    pub const ALL: [Self; 2] = [Self::Required, Self::NotRequired];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "Registration Required",
            Self::NotRequired => "No Registration",
        }
    }

    /// Whether an event with the given registration flag satisfies this choice.
    #[must_use]
    pub const fn admits(self, registration: bool) -> bool {
        match self {
            Self::Required => registration,
            Self::NotRequired => !registration,
        }
    }
}

/// Identifies one of the six dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Category,
    DateRange,
    Time,
    Location,
    Cost,
    Registration,
}

impl FilterField {
    /// Dropdowns in filter bar order.
    pub const ALL: [Self; 6] = [
        Self::Category,
        Self::DateRange,
        Self::Time,
        Self::Location,
        Self::Cost,
        Self::Registration,
    ];

    /// Heading shown above the dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::DateRange => "Date Range",
            Self::Time => "Time",
            Self::Location => "Location",
            Self::Cost => "Cost",
            Self::Registration => "Registration",
        }
    }

    /// Text of the dropdown's no-op choice.
    #[must_use]
    pub const fn sentinel_label(self) -> &'static str {
        match self {
            Self::Category | Self::Registration => "All Events",
            Self::DateRange => "All Dates",
            Self::Time => "All Times",
            Self::Location => "All Locations",
            Self::Cost => "All Costs",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the six dropdown filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownFilters {
    pub category: Selection<String>,
    pub date_range: Selection<DateRange>,
    pub time: Selection<TimeOfDay>,
    pub location: Selection<String>,
    pub cost: Selection<String>,
    pub registration: Selection<RegistrationFilter>,
}

impl DropdownFilters {
    /// Number of dropdowns not at their sentinel, date range included.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_events::domain::{DateRange, DropdownFilters, Selection};
    ///
    /// let mut filters = DropdownFilters::default();
    /// assert_eq!(filters.applied_count(), 0);
    ///
    /// filters.date_range = Selection::Specific(DateRange::ThisWeek);
    /// assert_eq!(filters.applied_count(), 1);
    /// ```
    #[must_use]
    pub fn applied_count(&self) -> usize {
        [
            self.category.is_set(),
            self.date_range.is_set(),
            self.time.is_set(),
            self.location.is_set(),
            self.cost.is_set(),
            self.registration.is_set(),
        ]
        .into_iter()
        .filter(|applied| *applied)
        .count()
    }

    /// Resets every dropdown to its sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_set(&self, field: FilterField) -> bool {
        match field {
            FilterField::Category => self.category.is_set(),
            FilterField::DateRange => self.date_range.is_set(),
            FilterField::Time => self.time.is_set(),
            FilterField::Location => self.location.is_set(),
            FilterField::Cost => self.cost.is_set(),
            FilterField::Registration => self.registration.is_set(),
        }
    }

    /// Current display text of a dropdown (its value or sentinel label).
    #[must_use]
    pub fn display_value(&self, field: FilterField) -> String {
        let value = match field {
            FilterField::Category => self.category.as_specific().cloned(),
            FilterField::DateRange => self.date_range.as_specific().map(|d| d.label().to_string()),
            FilterField::Time => self.time.as_specific().map(|t| t.description().to_string()),
            FilterField::Location => self.location.as_specific().cloned(),
            FilterField::Cost => self.cost.as_specific().cloned(),
            FilterField::Registration => {
                self.registration.as_specific().map(|r| r.label().to_string())
            }
        };
        value.unwrap_or_else(|| field.sentinel_label().to_string())
    }

    /// Moves one dropdown to its next (or previous) choice.
    pub fn cycle(&mut self, field: FilterField, forward: bool) {
        match field {
            FilterField::Category => {
                self.category = self.category.cycle(&owned(&DEFAULT_CATEGORIES), forward);
            }
            FilterField::DateRange => {
                self.date_range = self.date_range.cycle(&DateRange::ALL, forward);
            }
            FilterField::Time => {
                self.time = self.time.cycle(&TimeOfDay::ALL, forward);
            }
            FilterField::Location => {
                self.location = self.location.cycle(&owned(&DEFAULT_LOCATIONS), forward);
            }
            FilterField::Cost => {
                self.cost = self.cost.cycle(&owned(&DEFAULT_COSTS), forward);
            }
            FilterField::Registration => {
                self.registration = self.registration.cycle(&RegistrationFilter::ALL, forward);
            }
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_walks_through_unset() {
        let options = [1, 2, 3];
        let mut sel = Selection::Unset;
        let mut seen = vec![];
        for _ in 0..4 {
            sel = sel.cycle(&options, true);
            seen.push(sel.clone());
        }
        assert_eq!(
            seen,
            vec![
                Selection::Specific(1),
                Selection::Specific(2),
                Selection::Specific(3),
                Selection::Unset
            ]
        );
        assert_eq!(Selection::Unset.cycle(&options, false), Selection::Specific(3));
        assert_eq!(Selection::Specific(1).cycle(&options, false), Selection::Unset);
    }

    #[test]
    fn unknown_value_cycles_to_an_option() {
        let options = ["a".to_string(), "b".to_string()];
        let sel = Selection::Specific("z".to_string());
        assert_eq!(sel.cycle(&options, true), Selection::Specific("a".to_string()));
        assert_eq!(sel.cycle(&options, false), Selection::Specific("b".to_string()));
    }

    #[test]
    fn applied_count_and_clear() {
        let mut filters = DropdownFilters::default();
        for field in FilterField::ALL {
            filters.cycle(field, true);
        }
        assert_eq!(filters.applied_count(), 6);
        assert_eq!(filters.display_value(FilterField::Category), "Sports");
        assert_eq!(filters.display_value(FilterField::Registration), "Registration Required");
        assert_eq!(filters.display_value(FilterField::Time), "Morning (Before 12pm)");

        filters.clear();
        assert_eq!(filters.applied_count(), 0);
        assert_eq!(filters.display_value(FilterField::Cost), "All Costs");
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(FilterField::Registration.next(), FilterField::Category);
        assert_eq!(FilterField::Category.previous(), FilterField::Registration);
    }
}
