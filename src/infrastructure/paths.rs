//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally maps to the directory Zellij was started from (usually `~`).

use std::path::PathBuf;

/// Data directory, `~/.local/share/zellij/campus-events` on the host.
///
/// # Examples
///
/// ```
/// use campus_events::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/campus-events")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("campus-events")
}

/// Default location of the persisted allow-lists.
#[must_use]
pub fn preferences_path() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Maps a user-supplied path onto the sandbox.
///
/// `~` and `~/...` go under `/host`; anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use campus_events::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/events.json"), "/host/events.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/events.json"), "/data/events.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
