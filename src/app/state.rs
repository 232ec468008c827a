//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the plugin shows.
//! The event catalog and the preferences store are inputs; the filtered result
//! indices are derived and recomputed by [`AppState::apply_filters`] after any
//! change to the query, the dropdowns or the allow-lists.
//!
//! # Example
//!
//! ```rust
//! use campus_events::app::AppState;
//! use campus_events::domain::EventStore;
//! use campus_events::storage::PreferencesStore;
//! use campus_events::ui::Theme;
//!
//! let mut state = AppState::new(EventStore::builtin(), PreferencesStore::in_memory(), Theme::default());
//! state.search_query = "soccer".to_string();
//! state.apply_filters();
//! assert_eq!(state.filtered.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.summary, "Showing 1 of 8 events");
//! ```

use super::modes::{InputMode, ViewMode};
use crate::domain::{CampusEvent, DropdownFilters, EventStore, Facet, FilterField};
use crate::filter::{matching_indices, FilterQuery};
use crate::storage::PreferencesStore;
use crate::ui::helpers::match_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AdminEntry, AdminInfo, DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FilterChip,
    FooterInfo, HeaderInfo, SearchBarInfo, ToastInfo, UIViewModel,
};

/// Default toast lifetime.
pub const DEFAULT_TOAST_SECONDS: f64 = 2.0;

/// Cursor and text entry state of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPanel {
    /// Facet whose allow-list is shown.
    pub facet: Facet,

    /// Index into [`AppState::admin_candidates`].
    pub cursor: usize,

    /// Value being typed in [`InputMode::FacetEntry`].
    pub draft: String,
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self {
            facet: Facet::Location,
            cursor: 0,
            draft: String::new(),
        }
    }
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Every known event, in display order.
    pub catalog: EventStore,

    /// Owner of the facet allow-lists.
    pub preferences: PreferencesStore,

    /// Free-text query; matched case-insensitively.
    pub search_query: String,

    pub filters: DropdownFilters,

    /// Indices into `catalog` of the events passing all filters, in catalog
    /// order. Recomputed by [`Self::apply_filters`].
    pub filtered: Vec<usize>,

    /// Zero-based index into `filtered`.
    pub selected_index: usize,

    pub input_mode: InputMode,
    pub view_mode: ViewMode,

    /// Filter bar chip that the cycle keys act on.
    pub focused_filter: FilterField,

    pub admin: AdminPanel,

    /// Confirmation message, hidden when its timer fires.
    pub toast: Option<String>,

    pub toast_seconds: f64,

    pub theme: Theme,
}

impl AppState {
    /// Creates the state and computes the initial result set.
    #[must_use]
    pub fn new(catalog: EventStore, preferences: PreferencesStore, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            preferences,
            search_query: String::new(),
            filters: DropdownFilters::default(),
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Events,
            focused_filter: FilterField::Category,
            admin: AdminPanel::default(),
            toast: None,
            toast_seconds: DEFAULT_TOAST_SECONDS,
            theme,
        };
        state.apply_filters();
        state
    }

    /// Swaps in another preferences store, typically the on-disk one once
    /// filesystem access is granted, and re-filters.
    pub fn replace_preferences(&mut self, preferences: PreferencesStore) {
        tracing::debug!(preferences = ?preferences, "replacing preferences store");
        self.preferences = preferences;
        self.clamp_admin_cursor();
        self.apply_filters();
    }

    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The highlighted event, if any result is visible.
    #[must_use]
    pub fn selected_event(&self) -> Option<&CampusEvent> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&i| self.catalog.events().get(i))
    }

    /// Events passing all filters, in catalog order.
    pub fn visible_events(&self) -> impl Iterator<Item = &CampusEvent> {
        let events = self.catalog.events();
        self.filtered.iter().filter_map(move |&i| events.get(i))
    }

    /// Recomputes `filtered` from the query, dropdowns and allow-lists and
    /// clamps the selection.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_events = self.catalog.len(),
            query_len = self.search_query.len(),
            applied = self.filters.applied_count()
        )
        .entered();

        let query = FilterQuery::new(&self.search_query, self.preferences.get(), &self.filters);
        self.filtered = matching_indices(self.catalog.events(), &query);

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }

    /// Resets the query and every dropdown.
    pub fn clear_all(&mut self) {
        tracing::debug!("clearing all filters");
        self.search_query.clear();
        self.filters.clear();
        self.apply_filters();
    }

    /// Values listed in the admin panel for the current facet: the defaults
    /// followed by any enabled value that is not a default.
    #[must_use]
    pub fn admin_candidates(&self) -> Vec<String> {
        let facet = self.admin.facet;
        let mut values: Vec<String> = facet
            .default_values()
            .iter()
            .map(|v| (*v).to_string())
            .collect();
        for value in self.preferences.get().get(facet).iter() {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Value under the admin cursor.
    #[must_use]
    pub fn admin_cursor_value(&self) -> Option<String> {
        self.admin_candidates().into_iter().nth(self.admin.cursor)
    }

    pub fn move_admin_cursor(&mut self, forward: bool) {
        let len = self.admin_candidates().len();
        if len == 0 {
            return;
        }
        self.admin.cursor = if forward {
            (self.admin.cursor + 1) % len
        } else if self.admin.cursor == 0 {
            len - 1
        } else {
            self.admin.cursor - 1
        };
    }

    pub fn clamp_admin_cursor(&mut self) {
        let len = self.admin_candidates().len();
        self.admin.cursor = self.admin.cursor.min(len.saturating_sub(1));
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// The result table is windowed around the selection so the selected row
    /// stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());
        if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let events = self.catalog.events();
        let display_items: Vec<DisplayItem> = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &i)| {
                events
                    .get(i)
                    .map(|event| self.compute_display_item(event, visible_start + offset, cols))
            })
            .collect();

        let empty_state = self.filtered.is_empty().then(|| EmptyState {
            message: "No events found matching your filters.".to_string(),
            subtitle: "Press c to clear filters or a to review enabled values".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            search_bar: self.compute_search_bar(),
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state,
            detail: self.compute_detail(),
            admin: self.compute_admin(),
            toast: self.toast.as_ref().map(|message| ToastInfo {
                message: message.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, event: &CampusEvent, absolute_idx: usize, cols: usize) -> DisplayItem {
        const TITLE_WIDTH: usize = 30;
        const FIXED_COLUMNS_WIDTH: usize = 79;
        const MIN_LOCATION_WIDTH: usize = 16;

        let highlight_ranges = if self.search_query.is_empty() {
            vec![]
        } else {
            match_ranges(&event.title, &self.search_query)
                .into_iter()
                .filter(|(start, _)| *start < TITLE_WIDTH)
                .collect()
        };

        DisplayItem {
            title: truncate(&event.title, TITLE_WIDTH),
            category: event.category.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: truncate(
                &event.location,
                cols.saturating_sub(FIXED_COLUMNS_WIDTH).max(MIN_LOCATION_WIDTH),
            ),
            cost_badge: event.cost_badge.clone(),
            cost: event.cost.clone(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: " Campus Events ".to_string(),
            summary: format!("Showing {} of {} events", self.filtered.len(), self.catalog.len()),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let chips = FilterField::ALL
            .into_iter()
            .map(|field| FilterChip {
                label: field.label().to_string(),
                value: self.filters.display_value(field),
                is_focused: field == self.focused_filter && self.view_mode == ViewMode::Events,
                is_applied: self.filters.is_set(field),
            })
            .collect();

        FilterBarInfo {
            chips,
            applied_count: self.filters.applied_count(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        use super::modes::SearchFocus;

        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal | InputMode::FacetEntry => None,
        }
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        if self.view_mode != ViewMode::Details {
            return None;
        }
        let event = self.selected_event()?;

        let mut fields = vec![
            ("Date".to_string(), event.date.clone()),
            ("Time".to_string(), event.time.clone()),
        ];
        if !event.duration.is_empty() {
            fields.push(("Duration".to_string(), event.duration.clone()));
        }
        fields.extend([
            ("Location".to_string(), event.location.clone()),
            ("Capacity".to_string(), event.capacity.clone()),
            ("Registration".to_string(), event.registration_label().to_string()),
        ]);

        Some(DetailInfo {
            title: event.title.clone(),
            category: event.category.clone(),
            cost_badge: event.cost_badge.clone(),
            cost: event.cost.clone(),
            fields,
            description: event.full_description.clone(),
        })
    }

    fn compute_admin(&self) -> Option<AdminInfo> {
        if self.view_mode != ViewMode::Admin {
            return None;
        }

        let allow_list = self.preferences.get().get(self.admin.facet);
        let entries = self
            .admin_candidates()
            .into_iter()
            .enumerate()
            .map(|(i, value)| AdminEntry {
                is_enabled: allow_list.contains(&value),
                is_cursor: i == self.admin.cursor,
                value,
            })
            .collect();

        Some(AdminInfo {
            tabs: Facet::ALL
                .into_iter()
                .map(|facet| (facet.label().to_string(), facet == self.admin.facet))
                .collect(),
            entries,
            draft: (self.input_mode == InputMode::FacetEntry).then(|| self.admin.draft.clone()),
            enabled_count: allow_list.len(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match (self.view_mode, self.input_mode) {
            (_, InputMode::FacetEntry) => "Enter: add  ESC: cancel  Type a value",
            (ViewMode::Admin, _) => {
                "j/k: move  Space: toggle  x: remove  i: add  Tab: facet  r: reset  s: save  ESC: close"
            }
            (ViewMode::Details, _) => "ESC/Enter: back  q: quit",
            (ViewMode::Events, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (ViewMode::Events, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: details"
            }
            (ViewMode::Events, InputMode::Normal) => {
                "j/k: navigate  /: search  h/l: filter  [/]: change  c: clear  a: admin  Enter: details  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for table body after header, filter bar, table heading and
    /// footer (plus the search box when shown).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(13),
            InputMode::Normal | InputMode::FacetEntry => total_rows.saturating_sub(10),
        }
    }
}

/// Shortens `text` to at most `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(EventStore::builtin(), PreferencesStore::in_memory(), Theme::default())
    }

    #[test]
    fn starts_with_every_builtin_event_visible() {
        let state = state();
        assert_eq!(state.filtered, (0..8).collect::<Vec<_>>());
        assert_eq!(state.selected_event().map(|e| e.id), Some(1));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 7);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_when_results_shrink() {
        let mut state = state();
        state.selected_index = 7;
        state.search_query = "tournament".to_string();
        state.apply_filters();
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
    }

    #[test]
    fn admin_candidates_append_custom_values() {
        let mut state = state();
        state.admin.facet = Facet::Cost;
        state
            .preferences
            .add(Facet::Cost, "Donation")
            .expect("memory store write");
        assert_eq!(
            state.admin_candidates(),
            vec!["Free", "Paid", "Ticketed", "Donation"]
        );
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = state();
        state.selected_index = 7;
        let vm = state.compute_viewmodel(14, 100);
        assert_eq!(vm.display_items.len(), 4);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Game Night Social");
    }

    #[test]
    fn empty_results_produce_empty_state() {
        let mut state = state();
        state.search_query = "zzz".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel(24, 100);
        assert!(vm.display_items.is_empty());
        assert_eq!(
            vm.empty_state.map(|e| e.message).as_deref(),
            Some("No events found matching your filters.")
        );
        assert_eq!(vm.header.summary, "Showing 0 of 8 events");
    }
}
