//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! behavior, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use campus_events::ui::viewmodel::{FooterInfo, HeaderInfo, FilterBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Campus Events".to_string(),
//!         summary: "Showing 0 of 0 events".to_string(),
//!     },
//!     filter_bar: FilterBarInfo { chips: vec![], applied_count: 0 },
//!     search_bar: None,
//!     display_items: vec![],
//!     selected_index: 0,
//!     empty_state: None,
//!     detail: None,
//!     admin: None,
//!     toast: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.display_items.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,

    /// Present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows of the visible window of the result table.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Replaces the table when no event matches.
    pub empty_state: Option<EmptyState>,

    /// Drawn over the table in the details view.
    pub detail: Option<DetailInfo>,

    /// Drawn over the table in the admin view.
    pub admin: Option<AdminInfo>,

    pub toast: Option<ToastInfo>,
    pub footer: FooterInfo,
}

/// Title line plus the "Showing N of M events" summary.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub summary: String,
}

/// One dropdown in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Field name, e.g. "Time".
    pub label: String,

    /// Current value or the sentinel label.
    pub value: String,

    pub is_focused: bool,

    /// Whether the dropdown is set to something other than its sentinel.
    pub is_applied: bool,
}

#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub chips: Vec<FilterChip>,

    /// Badge count; zero hides the badge.
    pub applied_count: usize,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// False while the results list has focus.
    pub is_typing: bool,
}

/// One row of the result table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub cost_badge: String,

    /// Raw cost value used to pick the badge color.
    pub cost: String,

    pub is_selected: bool,

    /// Character ranges of `title` matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown in place of the table.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Full information for one event.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,
    pub category: String,
    pub cost_badge: String,
    pub cost: String,

    /// Label/value pairs: date, time, duration, location, capacity, registration.
    pub fields: Vec<(String, String)>,

    pub description: String,
}

/// Allow-list settings panel.
#[derive(Debug, Clone)]
pub struct AdminInfo {
    /// Facet tab labels paired with whether the tab is current.
    pub tabs: Vec<(String, bool)>,

    pub entries: Vec<AdminEntry>,

    /// Text being typed for a new value, when entry mode is active.
    pub draft: Option<String>,

    /// Number of enabled values in the current facet.
    pub enabled_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEntry {
    pub value: String,
    pub is_enabled: bool,
    pub is_cursor: bool,
}

#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help for the current mode.
    pub keybindings: String,
}
