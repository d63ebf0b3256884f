//! # Theme & Layout
//!
//! Colors and device breakpoints, passed explicitly to whoever renders the
//! components. Nothing in the core reads ambient theme state.
//!
//! ## Shape
//! ```text
//! Theme
//! ├── colors: ThemeColors      primary, background, surface, text,
//! │                            text_secondary, border, disabled
//! └── breakpoints: Breakpoints small_device_max_width (380)
//!
//! Theme::layout(width) ──► Layout::Compact  (width < 380)
//!                     └──► Layout::Regular
//! ```
//!
//! Themes are plain serde data so a front end can ship them as JSON.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Palette entries read by the components. Values are CSS-style hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ThemeColors {
    pub primary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub disabled: String,
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            primary: "#2e7d32".to_string(),
            background: "#f5f5f5".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1b1b1b".to_string(),
            text_secondary: "#6b6b6b".to_string(),
            border: "#e0e0e0".to_string(),
            disabled: "#d6d6d6".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: "#66bb6a".to_string(),
            background: "#121212".to_string(),
            surface: "#1e1e1e".to_string(),
            text: "#f1f1f1".to_string(),
            text_secondary: "#a0a0a0".to_string(),
            border: "#333333".to_string(),
            disabled: "#3a3a3a".to_string(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::light()
    }
}

/// Device-width thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Breakpoints {
    /// Screens narrower than this use the compact layout.
    pub small_device_max_width: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small_device_max_width: 380,
        }
    }
}

/// Sizing mode chosen from the screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Layout {
    Regular,
    Compact,
}

/// Background and foreground of a button in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlColors<'a> {
    pub background: &'a str,
    pub foreground: &'a str,
}

/// Complete rendering context handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Theme {
    pub colors: ThemeColors,
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            colors: ThemeColors::light(),
            breakpoints: Breakpoints::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: ThemeColors::dark(),
            breakpoints: Breakpoints::default(),
        }
    }

    /// Parses a theme from JSON.
    ///
    /// ```rust
    /// use tipcalc_core::theme::{Layout, Theme};
    ///
    /// let json = r##"{
    ///     "colors": {
    ///         "primary": "#000", "background": "#fff", "surface": "#fff",
    ///         "text": "#000", "textSecondary": "#555", "border": "#ccc",
    ///         "disabled": "#eee"
    ///     },
    ///     "breakpoints": { "smallDeviceMaxWidth": 400 }
    /// }"##;
    /// let theme = Theme::from_json(json).unwrap();
    /// assert_eq!(theme.layout(390), Layout::Compact);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Chooses the layout for a screen width.
    pub fn layout(&self, width: u32) -> Layout {
        if width < self.breakpoints.small_device_max_width {
            Layout::Compact
        } else {
            Layout::Regular
        }
    }

    /// Colors of a split-selector button; disabled buttons are greyed out.
    pub fn step_button(&self, enabled: bool) -> ControlColors<'_> {
        if enabled {
            ControlColors {
                background: &self.colors.primary,
                foreground: &self.colors.surface,
            }
        } else {
            ControlColors {
                background: &self.colors.disabled,
                foreground: &self.colors.text_secondary,
            }
        }
    }
}

/// Parses `#rgb` or `#rrggbb` into its red, green and blue channels.
///
/// ```rust
/// use tipcalc_core::theme::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#2e7d32"), Some((0x2e, 0x7d, 0x32)));
/// assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
/// assert_eq!(parse_hex_color("green"), None);
/// ```
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // #abc is #aabbcc
            let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}
