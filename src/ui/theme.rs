//! Theme management and ANSI escape sequence generation.
//!
//! Themes are small TOML documents. Two are built in and embedded at compile
//! time; any other theme is loaded from a file.
//!
//! # Built-in Themes
//!
//! - `daylight`: dark text for light terminals (default)
//! - `midnight`: light text for dark terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#1f2933"
//! text_normal = "#1f2933"
//! text_dim = "#7b8794"
//! border = "#cbd2d9"
//! search_bar_border = "#2f855a"
//! accent = "#2f855a"
//! error_fg = "#c53030"
//! notice_fg = "#2b6cb0"
//! empty_state_fg = "#7b8794"
//! ```
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::ui::theme::Theme;
//!
//! let theme = Theme::from_name("midnight").unwrap();
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "midnight");
//! ```

use crate::domain::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "daylight";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#2f855a").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, labels, units).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    /// Search bar border color.
    pub search_bar_border: String,

    /// Card titles and section headings.
    pub accent: String,
    /// Error message color.
    pub error_fg: String,
    /// Notice and progress text color.
    pub notice_fg: String,
    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "daylight" => include_str!("../../themes/daylight.toml"),
            "midnight" => include_str!("../../themes/midnight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::Theme`] if the file cannot be read or does not
    /// describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NutriError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| NutriError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Uncolored fallback used if the embedded default cannot be parsed.
    #[must_use]
    pub fn monochrome() -> Self {
        let white = "#ffffff".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                text_normal: white.clone(),
                text_dim: white.clone(),
                border: white.clone(),
                search_bar_border: white.clone(),
                accent: white.clone(),
                error_fg: white.clone(),
                notice_fg: white.clone(),
                empty_state_fg: white,
            },
        }
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
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

    /// ANSI 24-bit foreground color escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for a hex color.
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
    /// Returns the `daylight` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("daylight").unwrap().name, "daylight");
        assert_eq!(Theme::from_name("midnight").unwrap().name, "midnight");
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#2f855a"), "\u{1b}[38;2;47;133;90m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::monochrome();
        custom.name = "custom".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), custom);
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"half\"\n[colors]\nheader_fg = \"#000000\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(NutriError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(NutriError::Theme(_))
        ));
    }
}
