//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPCALC_*`)
//! 2. Theme file named by `TIPCALC_THEME_FILE` (JSON)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tipcalc_core::{Layout, SplitSelectorOptions, Theme, TipRate};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Tip rate applied at startup.
    pub tip_rate: TipRate,

    /// Whether the split count can be typed directly.
    pub split_editable: bool,

    /// Colors and breakpoints.
    pub theme: Theme,

    /// Paint the screen with the theme colors.
    pub color: bool,

    /// Width used to pick the layout (terminal columns stand in for points).
    pub screen_width: u32,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Tip: 15%
    /// - Split editing: enabled
    /// - Theme: light, 380pt breakpoint
    /// - Color: on
    /// - Width: 400 (regular layout)
    fn default() -> Self {
        AppConfig {
            tip_rate: TipRate::default(),
            split_editable: true,
            theme: Theme::light(),
            color: true,
            screen_width: 400,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `TIPCALC_TIP_RATE`: tip percent (`"18"`, `"17.5"`)
    /// - `TIPCALC_SPLIT_EDITABLE`: `true` / `false`
    /// - `TIPCALC_THEME`: `light` / `dark`
    /// - `TIPCALC_THEME_FILE`: path to a JSON theme, overrides `TIPCALC_THEME`
    /// - `TIPCALC_COLOR`: `true` / `false`; `NO_COLOR` (any value) turns it off
    /// - `TIPCALC_SCREEN_WIDTH`: layout width
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("TIPCALC_TIP_RATE") {
            let pct: f64 = raw
                .trim()
                .trim_end_matches('%')
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_TIP_RATE".to_string()))?;
            config.tip_rate = TipRate::from_percentage(pct)
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_TIP_RATE".to_string()))?;
        }

        if let Some(raw) = lookup("TIPCALC_SPLIT_EDITABLE") {
            config.split_editable = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_SPLIT_EDITABLE".to_string()))?;
        }

        if let Some(raw) = lookup("TIPCALC_THEME") {
            config.theme = match raw.trim().to_ascii_lowercase().as_str() {
                "light" => Theme::light(),
                "dark" => Theme::dark(),
                _ => return Err(ConfigError::InvalidValue("TIPCALC_THEME".to_string())),
            };
        }

        if let Some(path) = lookup("TIPCALC_THEME_FILE") {
            config.theme = load_theme_file(PathBuf::from(path))?;
        }

        if let Some(raw) = lookup("TIPCALC_COLOR") {
            config.color = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_COLOR".to_string()))?;
        }
        if lookup("NO_COLOR").is_some() {
            config.color = false;
        }

        if let Some(raw) = lookup("TIPCALC_SCREEN_WIDTH") {
            config.screen_width = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIPCALC_SCREEN_WIDTH".to_string()))?;
        }

        Ok(config)
    }

    pub fn split_options(&self) -> SplitSelectorOptions {
        SplitSelectorOptions {
            editable: self.split_editable,
        }
    }

    pub fn layout(&self) -> Layout {
        self.theme.layout(self.screen_width)
    }

    /// The theme to paint with, if color is on.
    pub fn palette(&self) -> Option<&Theme> {
        self.color.then_some(&self.theme)
    }
}

fn load_theme_file(path: PathBuf) -> Result<Theme, ConfigError> {
    let json = fs::read_to_string(&path).map_err(|source| ConfigError::ThemeFile {
        path: path.clone(),
        source,
    })?;
    Theme::from_json(&json).map_err(|source| ConfigError::ThemeFormat { path, source })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read theme file {path}: {source}")]
    ThemeFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme file {path} is not a valid theme: {source}")]
    ThemeFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tip_rate.bps(), 1500);
        assert_eq!(config.layout(), Layout::Regular);
        assert!(config.split_options().editable);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TIPCALC_TIP_RATE", "17.5%"),
            ("TIPCALC_SPLIT_EDITABLE", "false"),
            ("TIPCALC_THEME", "Dark"),
            ("TIPCALC_SCREEN_WIDTH", "320"),
        ])
        .unwrap();

        assert_eq!(config.tip_rate.bps(), 1750);
        assert!(!config.split_editable);
        assert_eq!(config.theme, Theme::dark());
        assert_eq!(config.layout(), Layout::Compact);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("TIPCALC_TIP_RATE", "lots")]),
            Err(ConfigError::InvalidValue(name)) if name == "TIPCALC_TIP_RATE"
        ));
        assert!(load(&[("TIPCALC_TIP_RATE", "150")]).is_err());
        assert!(load(&[("TIPCALC_SPLIT_EDITABLE", "maybe")]).is_err());
        assert!(load(&[("TIPCALC_THEME", "neon")]).is_err());
        assert!(load(&[("TIPCALC_SCREEN_WIDTH", "-1")]).is_err());
        assert!(load(&[("TIPCALC_COLOR", "sometimes")]).is_err());
    }

    #[test]
    fn test_color_switches() {
        assert!(load(&[]).unwrap().palette().is_some());

        let config = load(&[("TIPCALC_COLOR", "false")]).unwrap();
        assert!(config.palette().is_none());

        let config = load(&[("TIPCALC_COLOR", "true"), ("NO_COLOR", "1")]).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn test_missing_theme_file() {
        let err = load(&[("TIPCALC_THEME_FILE", "/nonexistent/tipcalc-theme.json")]).unwrap_err();
        assert!(matches!(err, ConfigError::ThemeFile { .. }));
    }

    #[test]
    fn test_theme_file_is_loaded() {
        let path = env::temp_dir().join(format!("tipcalc-theme-{}.json", std::process::id()));
        let mut theme = Theme::dark();
        theme.breakpoints.small_device_max_width = 500;
        fs::write(&path, serde_json::to_string(&theme).unwrap()).unwrap();

        let config = load(&[("TIPCALC_THEME_FILE", path.to_str().unwrap())]).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.theme, theme);
        assert_eq!(config.layout(), Layout::Compact);
    }
}
