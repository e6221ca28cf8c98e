//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents: two are bundled and custom ones can be loaded
//! from a file. Colors are hex strings converted to 24-bit ANSI sequences.
//!
//! # Built-in Themes
//!
//! - `hollywood-noir`: Gold on black, poster style (default)
//! - `studio-light`: Dark text on a light background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#facc15"
//! accent = "#f59e0b"
//! selection_fg = "#000000"
//! selection_bg = "#facc15"
//! text_normal = "#f3f4f6"
//! text_dim = "#9ca3af"
//! border = "#3f3f46"
//! control_border = "#a16207"
//! control_focus = "#fde047"
//! match_highlight_fg = "#000000"
//! match_highlight_bg = "#fbbf24"
//! empty_state_fg = "#9ca3af"
//! rating_fg = "#facc15"
//! badge_fg = "#fbbf24"
//! ```

use crate::domain::error::{CastlistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional title background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Accent for the result count, pending-search marker and selected card frame.
    pub accent: String,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text (subtitle, footer, placeholders).
    pub text_dim: String,

    /// Separator lines and card frames.
    pub border: String,

    /// Filter bar frame.
    pub control_border: String,
    /// Focused control label and value.
    pub control_focus: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Rating star and score.
    pub rating_fg: String,
    /// Genre badges.
    pub badge_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILTIN: [&'static str; 2] = ["hollywood-noir", "studio-light"];

    /// Loads a built-in theme by name.
    ///
    /// ```rust
    /// use castlist::ui::Theme;
    ///
    /// let theme = Theme::from_name("studio-light").unwrap();
    /// assert_eq!(theme.name, "studio-light");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "hollywood-noir" => include_str!("../../themes/hollywood-noir.toml"),
            "studio-light" => include_str!("../../themes/studio-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CastlistError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CastlistError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CastlistError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color sequence for a hex color.
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

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `hollywood-noir` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("hollywood-noir").expect("built-in hollywood-noir theme should always parse")
    }
}
