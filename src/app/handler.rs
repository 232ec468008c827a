//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes in response
//! to input. It returns whether the UI should re-render and a list of
//! [`Action`]s for the plugin shim to execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Filter bar**: `NextFilter`, `PrevFilter`, `CycleFilterForward`,
//!   `CycleFilterBackward`, `ClearAll`
//! - **Admin panel**: `OpenAdmin`, `NextFacet`, `ToggleFacetValue`,
//!   `RemoveFacetValue`, `BeginFacetEntry`, `ResetDefaults`, `SaveSettings`
//! - **System**: `ToastExpired`
//!
//! Keys mean different things per view: `KeyDown` moves the result selection
//! in the events view and the value cursor in the admin panel.
//!
//! # Example
//!
//! ```rust
//! use campus_events::app::{handle_event, AppState, Event};
//! use campus_events::domain::EventStore;
//! use campus_events::storage::PreferencesStore;
//! use campus_events::ui::Theme;
//!
//! let mut state = AppState::new(EventStore::builtin(), PreferencesStore::in_memory(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.selected_index, 1);
//! # Ok::<(), campus_events::CampusEventsError>(())
//! ```

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::storage::PreferencesStore;

/// Message shown after the admin panel is saved.
pub const SAVED_MESSAGE: &str = "Settings saved successfully!";

/// Input and system events understood by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection (or admin cursor) down, wrapping to the top.
    KeyDown,
    /// Moves the selection (or admin cursor) up, wrapping to the bottom.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Opens details, closes details, commits a typed value or toggles the
    /// admin value under the cursor, depending on the view.
    Select,
    /// Enters search mode with an empty query.
    SearchMode,
    /// Returns focus to the query while searching.
    FocusSearchBar,
    /// Moves focus from the query to the results, keeping the query.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query or the admin draft.
    Char(char),
    /// Removes the last character of the query or the admin draft.
    Backspace,
    /// Backs out of whatever is on top: text entry, overlays, then search.
    Escape,

    /// Focuses the next filter bar chip.
    NextFilter,
    /// Focuses the previous filter bar chip.
    PrevFilter,
    /// Moves the focused dropdown to its next choice.
    CycleFilterForward,
    /// Moves the focused dropdown to its previous choice.
    CycleFilterBackward,
    /// Clears the query and every dropdown.
    ClearAll,

    /// Opens the admin panel.
    OpenAdmin,
    /// Shows the next facet's allow-list.
    NextFacet,
    /// Enables or disables the value under the cursor.
    ToggleFacetValue,
    /// Disables the value under the cursor.
    RemoveFacetValue,
    /// Starts typing a new value for the current facet.
    BeginFacetEntry,
    /// Restores the default allow-lists.
    ResetDefaults,
    /// Confirms the admin panel with a toast.
    SaveSettings,

    /// The toast timer fired.
    ToastExpired,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Returns an error when a preferences change cannot be persisted. The change
/// is still applied in memory and the result set is refreshed before the
/// error is returned.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            match state.view_mode {
                ViewMode::Admin => state.move_admin_cursor(true),
                ViewMode::Events => state.move_selection_down(),
                ViewMode::Details => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            match state.view_mode {
                ViewMode::Admin => state.move_admin_cursor(false),
                ViewMode::Events => state.move_selection_up(),
                ViewMode::Details => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => handle_select(state),
        Event::SearchMode => {
            if state.view_mode != ViewMode::Events {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, char = %c, "search query updated");
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::FacetEntry => {
                state.admin.draft.push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::Search(SearchFocus::Navigating) => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.search_query.pop();
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::FacetEntry => {
                state.admin.draft.pop();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.input_mode == InputMode::FacetEntry {
                state.admin.draft.clear();
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            if state.view_mode != ViewMode::Events {
                tracing::debug!(view = ?state.view_mode, "closing overlay");
                state.view_mode = ViewMode::Events;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }

        Event::NextFilter | Event::PrevFilter => {
            if state.view_mode != ViewMode::Events {
                return Ok((false, vec![]));
            }
            state.focused_filter = if *event == Event::NextFilter {
                state.focused_filter.next()
            } else {
                state.focused_filter.previous()
            };
            Ok((true, vec![]))
        }
        Event::CycleFilterForward | Event::CycleFilterBackward => {
            if state.view_mode != ViewMode::Events {
                return Ok((false, vec![]));
            }
            let forward = *event == Event::CycleFilterForward;
            state.filters.cycle(state.focused_filter, forward);
            tracing::debug!(
                field = %state.focused_filter,
                value = %state.filters.display_value(state.focused_filter),
                "dropdown changed"
            );
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ClearAll => {
            if state.view_mode != ViewMode::Events {
                return Ok((false, vec![]));
            }
            state.clear_all();
            if matches!(state.input_mode, InputMode::Search(_)) {
                state.input_mode = InputMode::Search(SearchFocus::Typing);
            }
            Ok((true, vec![]))
        }

        Event::OpenAdmin => {
            tracing::debug!("opening admin panel");
            if matches!(state.input_mode, InputMode::Search(_)) {
                // The search bar is gone once the panel closes.
                state.search_query.clear();
                state.apply_filters();
            }
            state.view_mode = ViewMode::Admin;
            state.input_mode = InputMode::Normal;
            state.clamp_admin_cursor();
            Ok((true, vec![]))
        }
        Event::NextFacet => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            state.admin.facet = state.admin.facet.next();
            state.admin.cursor = 0;
            Ok((true, vec![]))
        }
        Event::ToggleFacetValue => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            toggle_at_cursor(state)
        }
        Event::RemoveFacetValue => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            let Some(value) = state.admin_cursor_value() else {
                return Ok((false, vec![]));
            };
            let facet = state.admin.facet;
            update_preferences(state, |prefs| prefs.remove(facet, &value))?;
            Ok((true, vec![]))
        }
        Event::BeginFacetEntry => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            state.admin.draft.clear();
            state.input_mode = InputMode::FacetEntry;
            Ok((true, vec![]))
        }
        Event::ResetDefaults => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            update_preferences(state, PreferencesStore::reset_to_defaults)?;
            Ok((true, vec![]))
        }
        Event::SaveSettings => {
            if state.view_mode != ViewMode::Admin {
                return Ok((false, vec![]));
            }
            tracing::debug!(seconds = state.toast_seconds, "settings saved, showing toast");
            state.toast = Some(SAVED_MESSAGE.to_string());
            Ok((
                true,
                vec![Action::ScheduleToastDismiss {
                    seconds: state.toast_seconds,
                }],
            ))
        }

        Event::ToastExpired => {
            if state.toast.take().is_some() {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
    }
}

fn handle_select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.input_mode == InputMode::FacetEntry {
        let draft = std::mem::take(&mut state.admin.draft);
        state.input_mode = InputMode::Normal;
        let facet = state.admin.facet;
        let added = update_preferences(state, |prefs| prefs.add(facet, &draft))?;
        tracing::debug!(facet = ?facet, value = %draft.trim(), added, "facet value entered");
        return Ok((true, vec![]));
    }

    match state.view_mode {
        ViewMode::Details => {
            state.view_mode = ViewMode::Events;
            Ok((true, vec![]))
        }
        ViewMode::Admin => toggle_at_cursor(state),
        ViewMode::Events => {
            let Some(event) = state.selected_event() else {
                tracing::debug!("no event selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.search_query.clear();
                    state.apply_filters();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };
            tracing::debug!(event_id = event.id, title = %event.title, "opening event details");
            state.view_mode = ViewMode::Details;
            Ok((true, vec![]))
        }
    }
}

fn toggle_at_cursor(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(value) = state.admin_cursor_value() else {
        return Ok((false, vec![]));
    };
    let facet = state.admin.facet;
    update_preferences(state, |prefs| prefs.toggle(facet, &value))?;
    Ok((true, vec![]))
}

/// Runs a preferences mutation and refreshes derived state whether or not it
/// was persisted.
fn update_preferences<T>(
    state: &mut AppState,
    mutate: impl FnOnce(&mut PreferencesStore) -> Result<T>,
) -> Result<T> {
    let result = mutate(&mut state.preferences);
    state.clamp_admin_cursor();
    state.apply_filters();
    if let Err(e) = &result {
        tracing::warn!(error = %e, "failed to persist preferences");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventStore, Facet, FilterField, Selection, TimeOfDay};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(EventStore::builtin(), PreferencesStore::in_memory(), Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).expect("event handled");
        }
    }

    #[test]
    fn admin_panel_drops_the_search_query() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::Char('s'), Event::Char('o'), Event::Char('c')]);
        send(&mut state, &[Event::FocusResults]);
        assert_eq!(state.filtered.len(), 2);

        send(&mut state, &[Event::OpenAdmin, Event::Escape]);
        assert_eq!(state.view_mode, ViewMode::Events);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 8);

        let vm = state.compute_viewmodel(30, 120);
        assert!(vm.search_bar.is_none());
        assert_eq!(vm.header.summary, "Showing 8 of 8 events");
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::Char('j'), Event::Char('a')]);
        assert_eq!(state.search_query, "ja");
        assert!(state.filtered.is_empty());

        send(&mut state, &[Event::Backspace, Event::Backspace, Event::Char('n')]);
        assert!(state.filtered.len() > 1);
    }

    #[test]
    fn chars_are_ignored_outside_text_modes() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).expect("handled");
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn focus_results_keeps_query_and_exit_clears_it() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::Char('n'), Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.search_query, "n");

        send(&mut state, &[Event::ExitSearch]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 8);
    }

    #[test]
    fn cycling_time_filter_through_sentinel() {
        let mut state = state();
        send(&mut state, &[Event::NextFilter, Event::NextFilter]);
        assert_eq!(state.focused_filter, FilterField::Time);

        send(&mut state, &[Event::CycleFilterBackward]);
        assert_eq!(state.filters.time, Selection::Specific(TimeOfDay::Evening));

        send(&mut state, &[Event::CycleFilterForward]);
        assert_eq!(state.filters.time, Selection::Unset);
    }

    #[test]
    fn select_opens_and_closes_details() {
        let mut state = state();
        send(&mut state, &[Event::KeyDown, Event::Select]);
        assert_eq!(state.view_mode, ViewMode::Details);
        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(
            vm.detail.map(|d| d.title).as_deref(),
            Some("Student Government Elections")
        );

        send(&mut state, &[Event::Select]);
        assert_eq!(state.view_mode, ViewMode::Events);
    }

    #[test]
    fn admin_entry_adds_trimmed_value() {
        let mut state = state();
        send(&mut state, &[Event::OpenAdmin, Event::NextFacet, Event::BeginFacetEntry]);
        assert_eq!(state.admin.facet, Facet::Category);
        for c in "  Workshops ".chars() {
            send(&mut state, &[Event::Char(c)]);
        }
        send(&mut state, &[Event::Select]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.preferences.get().categories.contains("Workshops"));
        assert!(state.admin.draft.is_empty());
    }

    #[test]
    fn admin_toggle_hides_events() {
        let mut state = state();
        send(&mut state, &[Event::OpenAdmin, Event::ToggleFacetValue]);
        assert!(!state.preferences.get().locations.contains("University Arena"));
        assert!(state.visible_events().all(|e| e.location != "University Arena"));

        send(&mut state, &[Event::ResetDefaults]);
        assert!(state.preferences.get().locations.contains("University Arena"));
    }

    #[test]
    fn save_shows_toast_until_timer_fires() {
        let mut state = state();
        send(&mut state, &[Event::OpenAdmin]);
        let (_, actions) = handle_event(&mut state, &Event::SaveSettings).expect("handled");
        assert_eq!(actions, vec![Action::ScheduleToastDismiss { seconds: 2.0 }]);
        assert_eq!(state.toast.as_deref(), Some(SAVED_MESSAGE));

        send(&mut state, &[Event::ToastExpired]);
        assert!(state.toast.is_none());
    }

    #[test]
    fn escape_unwinds_entry_then_overlay() {
        let mut state = state();
        send(&mut state, &[Event::OpenAdmin, Event::BeginFacetEntry, Event::Char('x')]);
        send(&mut state, &[Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.view_mode, ViewMode::Admin);

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.view_mode, ViewMode::Events);
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).expect("handled");
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
