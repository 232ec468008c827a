//! Error types for the campus events plugin.
//!
//! This module defines the centralized error type [`CampusEventsError`] and a type
//! alias [`Result`] used by every fallible operation in the crate. The filter engine
//! and time classifier never fail; errors only come from the surroundings (storage,
//! catalog loading and theme files).

use thiserror::Error;

/// The main error type for campus events operations.
///
/// Most variants carry a human-readable description. I/O failures convert
/// automatically through `#[from]`.
///
/// # Examples
///
/// ```
/// use campus_events::CampusEventsError;
///
/// fn read_preferences() -> Result<(), CampusEventsError> {
///     Err(CampusEventsError::Storage("backend unavailable".to_string()))
/// }
///
/// assert!(read_preferences().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CampusEventsError {
    /// Key-value storage operation failed.
    ///
    /// Covers unreadable or unwritable preference files, serialization failures
    /// and poisoned in-memory stores.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The event catalog could not be built.
    ///
    /// Occurs when a catalog file cannot be parsed or contains duplicate ids.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for campus events operations.
pub type Result<T> = std::result::Result<T, CampusEventsError>;
