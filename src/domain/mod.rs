//! Domain layer for the campus events plugin.
//!
//! Core types and rules, independent of Zellij APIs and storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`event`]: The immutable event record
//! - [`catalog`]: The ordered event store and built-in listings
//! - [`facets`]: Facets and their allow-lists
//! - [`filters`]: Dropdown selections and filter state
//! - [`time_of_day`]: Time-of-day classification of free-form time strings
//!
//! # Examples
//!
//! ```
//! use campus_events::domain::{EventStore, TimeOfDay, classify};
//!
//! let store = EventStore::builtin();
//! let evening = store
//!     .events()
//!     .iter()
//!     .filter(|e| classify(&e.time) == TimeOfDay::Evening)
//!     .count();
//! assert!(evening > 0);
//! ```

pub mod catalog;
pub mod error;
pub mod event;
pub mod facets;
pub mod filters;
pub mod time_of_day;

pub use catalog::EventStore;
pub use error::{CampusEventsError, Result};
pub use event::CampusEvent;
pub use facets::{AllowList, Facet, FacetAllowLists};
pub use filters::{DateRange, DropdownFilters, FilterField, RegistrationFilter, Selection};
pub use time_of_day::{classify, TimeOfDay};
