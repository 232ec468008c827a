//! Filter engine computing the visible subset of the event store.
//!
//! Filtering is a pure function of its inputs and is cheap enough on the
//! catalog sizes this plugin handles to rerun after every keystroke.
//!
//! # Modules
//!
//! - [`engine`]: Predicate evaluation and stable filtering

pub mod engine;

pub use engine::{filter_events, matches_search, matching_indices, FilterQuery};
