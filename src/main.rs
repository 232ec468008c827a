//! Zellij plugin wrapper and entry point.
//!
//! Translates Zellij events into library [`Event`]s and library [`Action`]s
//! into Zellij API calls. Everything else lives in the library crate.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` with
//!    in-memory preferences
//! 2. **Permissions**: Request `FullHdAccess`; when granted, load persisted
//!    preferences from the data directory
//! 3. **Update**: Map keys and timers to events, run `handle_event`, execute
//!    actions
//! 4. **Render**: Draw the view model
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Event list:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Show details
//! - `/`: Search
//! - `h`/`l` or `Shift+Tab`/`Tab`: Focus previous/next filter
//! - `[`/`]` or `Left`/`Right`: Change focused filter
//! - `c`: Clear query and filters
//! - `a`: Admin panel
//! - `q`: Close plugin
//!
//! Search:
//! - Type to filter, `Enter` to move to results, `/` to edit again, `Esc` to exit
//!
//! Details:
//! - `Esc`/`Enter`: Back
//!
//! Admin panel:
//! - `j`/`k`: Move, `Space`/`Enter`: Toggle, `x`: Remove, `i`: Add value
//! - `Tab`: Next facet, `r`: Reset to defaults, `s`: Save, `Esc`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use campus_events::{handle_event, Action, Config, Event, InputMode, SearchFocus, ViewMode};

register_plugin!(State);

struct State {
    app: campus_events::AppState,
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: campus_events::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds state and asks for filesystem access.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        campus_events::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = campus_events::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::Timer, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            // Any timer hides whatever toast is showing, so a second save inside
            // the window is cut short by the first save's timer.
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::ToastExpired,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        campus_events::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match (self.app.view_mode, self.app.input_mode) {
            (_, InputMode::FacetEntry) | (ViewMode::Events, InputMode::Search(SearchFocus::Typing)) => {
                Self::map_text_key(key, self.app.input_mode)
            }
            (ViewMode::Admin, _) => Self::map_admin_key(key),
            (ViewMode::Details, _) => Some(match key.bare_key {
                BareKey::Esc => Event::Escape,
                BareKey::Enter => Event::Select,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            (ViewMode::Events, _) => self.map_events_key(key),
        }
    }

    fn map_text_key(key: &KeyWithModifier, mode: InputMode) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc if mode == InputMode::FacetEntry => Event::Escape,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter if mode == InputMode::FacetEntry => Event::Select,
            BareKey::Enter | BareKey::Down => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_admin_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Tab => Event::NextFacet,
            BareKey::Char(' ') => Event::ToggleFacetValue,
            BareKey::Enter => Event::Select,
            BareKey::Char('x') | BareKey::Delete => Event::RemoveFacetValue,
            BareKey::Char('i') => Event::BeginFacetEntry,
            BareKey::Char('r') => Event::ResetDefaults,
            BareKey::Char('s') => Event::SaveSettings,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_events_key(&self, key: &KeyWithModifier) -> Option<Event> {
        let searching = matches!(self.app.input_mode, InputMode::Search(_));

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PrevFilter);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Char('/') if searching => Event::FocusSearchBar,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace if searching => Event::Backspace,
            BareKey::Tab | BareKey::Char('l') => Event::NextFilter,
            BareKey::Char('h') => Event::PrevFilter,
            BareKey::Right | BareKey::Char(']') => Event::CycleFilterForward,
            BareKey::Left | BareKey::Char('[') => Event::CycleFilterBackward,
            BareKey::Char('c') => Event::ClearAll,
            BareKey::Char('a') => Event::OpenAdmin,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Swaps in the persisted preferences once the filesystem is reachable.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading persisted preferences");
                match campus_events::open_preferences(&self.config) {
                    Ok(preferences) => {
                        self.app.replace_preferences(preferences);
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to open preferences, keeping defaults in memory");
                        false
                    }
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - preferences will not persist");
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleToastDismiss { seconds } => {
                tracing::debug!(seconds = seconds, "scheduling toast dismissal");
                set_timeout(*seconds);
            }
        }
    }
}
