//! Input and view mode state types for the application.
//!
//! The input mode decides how key presses are interpreted; the view mode
//! decides what is drawn over the event list.
//!
//! # State Machine
//!
//! ```text
//!            /                      Enter
//!   Normal ───────► Search(Typing) ───────► Search(Navigating)
//!     ▲                 │  ▲                       │
//!     └──── Esc ────────┘  └────────── / ──────────┘
//!
//!   Events ── Enter ──► Details ── Esc/Enter ──► Events
//!   Events ──── a ────► Admin   ──── Esc ──────► Events
//!                        │  i          Enter/Esc
//!                        └──► FacetEntry ─────► Normal
//! ```
//!
//! # Example
//!
//! ```rust
//! use campus_events::app::modes::{InputMode, SearchFocus, ViewMode};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.accepts_text());
//! assert_eq!(ViewMode::default(), ViewMode::Events);
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters go into the query.
    Typing,

    /// The query is kept but keys move the selection.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation, filter bar and command keys.
    #[default]
    Normal,

    /// Search is active; see [`SearchFocus`].
    Search(SearchFocus),

    /// Typing a new value for the admin panel's current facet.
    FacetEntry,
}

impl InputMode {
    /// Whether printable keys should be treated as text.
    #[must_use]
    pub const fn accepts_text(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::FacetEntry)
    }
}

/// Which screen is on top of the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Filter bar and event table.
    #[default]
    Events,

    /// Full description of the selected event.
    Details,

    /// Allow-list settings panel.
    Admin,
}
