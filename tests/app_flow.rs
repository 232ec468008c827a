//! End-to-end flows through `handle_event`.

use campus_events::app::handler::SAVED_MESSAGE;
use campus_events::domain::{Facet, FilterField};
use campus_events::{handle_event, initialize, open_preferences, Action, AppState, Config, Event, ViewMode};

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        let (_, mut produced) = handle_event(state, event).expect("event handled");
        actions.append(&mut produced);
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, &[Event::Char(c)]);
    }
}

#[test]
fn search_then_clear_all_restores_everything() {
    let mut state = initialize(&Config::default());
    send(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "club");
    send(&mut state, &[Event::FocusResults]);

    // Focus Cost and pick the first concrete value.
    for _ in 0..4 {
        send(&mut state, &[Event::NextFilter]);
    }
    assert_eq!(state.focused_filter, FilterField::Cost);
    send(&mut state, &[Event::CycleFilterForward]);
    assert!(state.filtered.len() < 8);

    send(&mut state, &[Event::ClearAll]);
    assert!(state.search_query.is_empty());
    assert_eq!(state.filters.applied_count(), 0);
    assert_eq!(state.filtered.len(), 8);
}

#[test]
fn applied_count_includes_date_range() {
    let mut state = initialize(&Config::default());
    send(&mut state, &[Event::NextFilter, Event::CycleFilterForward]);
    assert_eq!(state.focused_filter, FilterField::DateRange);

    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(vm.filter_bar.applied_count, 1);
    assert_eq!(vm.header.summary, "Showing 8 of 8 events");
}

#[test]
fn details_open_and_close() {
    let mut state = initialize(&Config::default());
    send(&mut state, &[Event::KeyDown, Event::KeyDown, Event::Select]);
    assert_eq!(state.view_mode, ViewMode::Details);
    assert_eq!(state.selected_event().map(|e| e.id), Some(3));

    let vm = state.compute_viewmodel(30, 120);
    assert!(vm.detail.is_some());

    send(&mut state, &[Event::Escape]);
    assert_eq!(state.view_mode, ViewMode::Events);
}

#[test]
fn save_shows_toast_until_timer_fires() {
    let config = Config {
        toast_seconds: 3.5,
        ..Config::default()
    };
    let mut state = initialize(&config);

    let actions = send(&mut state, &[Event::OpenAdmin, Event::SaveSettings]);
    assert_eq!(actions, vec![Action::ScheduleToastDismiss { seconds: 3.5 }]);
    assert_eq!(state.toast.as_deref(), Some(SAVED_MESSAGE));

    send(&mut state, &[Event::ToastExpired]);
    assert!(state.toast.is_none());
}

#[test]
fn admin_changes_persist_and_refilter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        preferences_file: Some(dir.path().join("preferences.json").display().to_string()),
        ..Config::default()
    };

    {
        let mut state = initialize(&config);
        state.replace_preferences(open_preferences(&config).expect("open preferences"));

        // Cursor starts on the first location, University Arena.
        send(&mut state, &[Event::OpenAdmin, Event::ToggleFacetValue]);
        assert!(!state.preferences.get().locations.contains("University Arena"));
        assert!(!state.visible_events().any(|e| e.location == "University Arena"));
        assert_eq!(state.filtered.len(), 7);

        send(&mut state, &[Event::NextFacet, Event::NextFacet, Event::BeginFacetEntry]);
        assert_eq!(state.admin.facet, Facet::Cost);
        type_text(&mut state, "Donation");
        send(&mut state, &[Event::Select]);
    }

    let reopened = open_preferences(&config).expect("reopen preferences");
    assert!(!reopened.get().locations.contains("University Arena"));
    assert!(reopened.get().costs.contains("Donation"));
}

#[test]
fn close_focus_is_forwarded() {
    let mut state = initialize(&Config::default());
    let (render, actions) = handle_event(&mut state, &Event::CloseFocus).expect("handled");
    assert!(!render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
