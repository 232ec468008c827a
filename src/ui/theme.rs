//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files. Two are built in and compiled into the plugin; a
//! user theme can be loaded from disk with [`Theme::from_file`].
//!
//! # Built-in Themes
//!
//! - `campus-dark`: Dark background palette (default)
//! - `campus-light`: Light background palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e2e8f0"
//! selection_fg = "#0f172a"
//! selection_bg = "#60a5fa"
//! text_normal = "#e2e8f0"
//! text_dim = "#64748b"
//! border = "#334155"
//! search_bar_border = "#60a5fa"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#facc15"
//! empty_state_fg = "#60a5fa"
//! chip_focus_fg = "#60a5fa"
//! chip_applied_fg = "#facc15"
//! badge_fg = "#0f172a"
//! badge_free = "#4ade80"
//! badge_paid = "#60a5fa"
//! badge_ticketed = "#c084fc"
//! enabled_fg = "#4ade80"
//! disabled_fg = "#64748b"
//! toast_fg = "#0f172a"
//! toast_bg = "#4ade80"
//! ```
//!
//! # Example
//!
//! ```rust
//! use campus_events::ui::theme::Theme;
//!
//! let theme = Theme::from_name("campus-light").expect("built-in theme");
//! assert_eq!(theme.badge_color("FREE"), theme.colors.badge_free);
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{CampusEventsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "campus-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, secondary columns and subtitles.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Filter chip under the cursor.
    pub chip_focus_fg: String,
    /// Filter chips set to something other than their sentinel.
    pub chip_applied_fg: String,

    /// Text on cost badges.
    pub badge_fg: String,
    pub badge_free: String,
    pub badge_paid: String,
    pub badge_ticketed: String,

    /// Admin panel value markers.
    pub enabled_fg: String,
    pub disabled_fg: String,

    pub toast_fg: String,
    pub toast_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "campus-dark" => include_str!("../../themes/campus-dark.toml"),
            "campus-light" => include_str!("../../themes/campus-light.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme = %name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CampusEventsError::Theme`] if the file cannot be read or is
    /// not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CampusEventsError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| CampusEventsError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Badge color for a cost value, matched case-insensitively.
    ///
    /// Unknown costs use the dimmed text color.
    #[must_use]
    pub fn badge_color(&self, cost: &str) -> &str {
        match cost.to_lowercase().as_str() {
            "free" => &self.colors.badge_free,
            "paid" => &self.colors.badge_paid,
            "ticketed" => &self.colors.badge_ticketed,
            _ => &self.colors.text_dim,
        }
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the built-in TOML cannot be parsed.
    fn fallback() -> Self {
        let white = || "#ffffff".to_string();
        let grey = || "#808080".to_string();
        let black = || "#000000".to_string();
        Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                selection_fg: black(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                search_bar_border: white(),
                match_highlight_fg: black(),
                match_highlight_bg: white(),
                empty_state_fg: white(),
                chip_focus_fg: white(),
                chip_applied_fg: white(),
                badge_fg: black(),
                badge_free: white(),
                badge_paid: white(),
                badge_ticketed: white(),
                enabled_fg: white(),
                disabled_fg: grey(),
                toast_fg: black(),
                toast_bg: white(),
            },
        }
    }
}

impl Default for Theme {
    /// The `campus-dark` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["campus-dark", "campus-light"] {
            let theme = Theme::from_name(name).expect("built-in theme parses");
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn badge_color_ignores_case() {
        let theme = Theme::default();
        assert_eq!(theme.badge_color("Ticketed"), theme.colors.badge_ticketed);
        assert_eq!(theme.badge_color("paid"), theme.colors.badge_paid);
        assert_eq!(theme.badge_color("Donation"), theme.colors.text_dim);
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::fg("#ff8000"), "\u{001b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("nope"), "\u{001b}[48;2;255;255;255m");
    }

    #[test]
    fn theme_file_errors_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"broken\"\n").expect("write theme");
        assert!(matches!(Theme::from_file(&path), Err(CampusEventsError::Theme(_))));
    }
}
