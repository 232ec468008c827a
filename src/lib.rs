//! Campus Events: a Zellij plugin for browsing campus events.
//!
//! The plugin shows a catalog of events and narrows it with:
//! - A case-insensitive text search over title, description and location
//! - Six dropdown filters (category, date range, time of day, location, cost,
//!   registration)
//! - Per-facet allow-lists managed from an admin panel and persisted as JSON
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions, view models             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Filter Engine │   │ Storage Layer │
//! │ (ui/)         │   │ (filter/)     │   │ (storage/)    │
//! │ - Rendering   │   │ - Predicates  │   │ - Preferences │
//! │ - Theming     │   │ - Stable pass │   │ - JSON file   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Events, catalog, facets, dropdowns, time of day  │
//! │  - Errors, sandbox paths                            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to a rotating JSON file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/campus-events.wasm" {
//!         catalog_file "~/events.json"
//!         preferences_file "~/.config/campus-events/preferences.json"
//!         theme "campus-light"
//!         trace_level "debug"
//!         toast_seconds "3"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. `load` parses the configuration, installs tracing and builds an
//!    [`AppState`] with in-memory preferences.
//! 2. Once filesystem access is granted, [`open_preferences`] loads the
//!    persisted allow-lists and replaces the in-memory store.
//! 3. Key presses become [`Event`]s, [`handle_event`] updates state and
//!    returns [`Action`]s, and the UI is re-rendered from a fresh view model.
//!
//! # Example
//!
//! ```rust
//! use campus_events::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::SearchMode, Event::Char('j'), Event::Char('a'), Event::Char('z')] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert!(state.filtered.is_empty());
//! # Ok::<(), campus_events::CampusEventsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use domain::{CampusEvent, CampusEventsError, EventStore, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{JsonFileStore, PreferencesStore};

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file replacing the built-in catalog. `~` is expanded.
    pub catalog_file: Option<String>,

    /// Where allow-lists are persisted. Defaults to
    /// [`infrastructure::preferences_path`].
    pub preferences_file: Option<String>,

    /// Built-in theme: `campus-dark` or `campus-light`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Lifetime of the "saved" toast. Default: 2 seconds.
    pub toast_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            preferences_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            toast_seconds: app::state::DEFAULT_TOAST_SECONDS,
        }
    }
}

impl Config {
    /// Parses configuration with fallbacks for missing or invalid values.
    ///
    /// Blank strings count as unset; `toast_seconds` must be a positive
    /// number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use campus_events::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "campus-light".to_string());
    /// map.insert("toast_seconds".to_string(), "-1".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("campus-light"));
    /// assert_eq!(config.toast_seconds, 2.0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let toast_seconds = text("toast_seconds")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(app::state::DEFAULT_TOAST_SECONDS);

        Self {
            catalog_file: text("catalog_file"),
            preferences_file: text("preferences_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            toast_seconds,
        }
    }

    /// Sandbox path of the preferences file.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file
            .as_deref()
            .map_or_else(infrastructure::preferences_path, |p| {
                PathBuf::from(infrastructure::expand_tilde(p))
            })
    }
}

/// Builds the initial application state.
///
/// Preferences start in memory with the defaults; see [`open_preferences`]
/// for the persisted store. A catalog or theme file that fails to load is
/// logged and replaced by the built-in one.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing campus events plugin");

    let mut state = AppState::new(
        load_catalog(config),
        PreferencesStore::in_memory(),
        load_theme(config),
    );
    state.toast_seconds = config.toast_seconds;
    state
}

/// Opens the persisted allow-lists at [`Config::preferences_path`].
///
/// # Errors
///
/// Returns an error if the file exists but is unreadable or not a valid
/// preferences document, or if its directory cannot be created.
pub fn open_preferences(config: &Config) -> Result<PreferencesStore> {
    let path = config.preferences_path();
    tracing::debug!(path = ?path, "opening persisted preferences");
    let backend = JsonFileStore::open(path)?;
    PreferencesStore::load(Box::new(backend))
}

fn load_catalog(config: &Config) -> EventStore {
    let Some(file) = &config.catalog_file else {
        return EventStore::builtin();
    };
    let path = infrastructure::expand_tilde(file);
    match EventStore::from_file(&path) {
        Ok(store) => {
            tracing::debug!(path = %path, events = store.len(), "catalog loaded from file");
            store
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "failed to load catalog, using built-in events");
            EventStore::builtin()
        }
    }
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}
