// src/config.rs

//! Defines the configuration structures for `slicebar`.
//!
//! The configuration is deserialized from a JSON file. Every section carries
//! `#[serde(default)]`, so a file only needs the settings it changes and an
//! absent file behaves like `{}`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::night::NightWindow;
use crate::renderer::{Decorations, RenderRequest};
use crate::slices::{Mode, SliceBoundary};
use crate::theme::{Theme, ThemeRegistry, DEFAULT_BOOLEAN};

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Strip geometry, mode and theme.
    pub render: RenderConfig,
    /// Outline and per-sample division lines.
    pub decorations: Decorations,
    /// Clock window used when padding a night of samples.
    pub window: NightWindow,
    /// Additional themes, registered after the built-ins.
    pub themes: Vec<Theme>,
}

impl Config {
    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Built-in themes plus the themes declared here. A configured theme with a
    /// built-in name replaces the built-in.
    pub fn theme_registry(&self) -> ThemeRegistry {
        let mut registry = ThemeRegistry::with_builtins();
        for theme in &self.themes {
            registry.register(theme.clone());
        }
        registry
    }

    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            width: self.render.width,
            height: self.render.height,
            mode: self.render.mode,
            theme: self.render.theme.clone(),
            boundary: self.render.boundary,
            decorations: self.decorations,
        }
    }
}

// --- Render Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Strip width in pixels (one slice per column).
    pub width: u32,
    /// Strip height in pixels.
    pub height: u32,
    pub mode: Mode,
    /// Name of a registered theme.
    pub theme: String,
    pub boundary: SliceBoundary,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1000,
            height: 50,
            mode: Mode::BooleanPartial,
            theme: DEFAULT_BOOLEAN.to_string(),
            boundary: SliceBoundary::Shared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::state::StateCode;
    use crate::theme::ZEO;

    #[test_log::test]
    fn test_empty_json_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.width, 1000);
        assert_eq!(config.render.height, 50);
        assert!(config.decorations.outline);
        assert_eq!(config.window.interval_seconds, 30);
    }

    #[test_log::test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_json(
            r#"{
                "render": { "mode": "integer", "theme": "zeo" },
                "decorations": { "bit_division_threshold": 5 },
                "window": { "start_hour_pm": 9, "end_hour_am": 11 }
            }"#,
        )
        .unwrap();

        let request = config.render_request();
        assert_eq!(request.mode, Mode::Integer);
        assert_eq!(request.theme, ZEO);
        assert_eq!(request.width, 1000);
        assert_eq!(request.boundary, SliceBoundary::Shared);
        assert!(request.decorations.outline);
        assert_eq!(request.decorations.bit_division_threshold, 5);
        assert_eq!(config.window.total_samples(), 1680);
    }

    #[test_log::test]
    fn test_configured_themes_are_registered() {
        let config = Config::from_json(
            r#"{ "themes": [ { "name": "night", "colors": { "-1": [0, 0, 0], "1": [9, 9, 9] } } ] }"#,
        )
        .unwrap();

        let registry = config.theme_registry();
        let theme = registry.lookup("night").unwrap();
        assert_eq!(theme.color_for(StateCode::ON), Ok(Rgb::new(9, 9, 9)));
        assert!(registry.lookup(DEFAULT_BOOLEAN).is_ok());
        assert!(registry.lookup(ZEO).is_ok());
    }

    #[test_log::test]
    fn test_unknown_mode_is_rejected() {
        assert!(Config::from_json(r#"{ "render": { "mode": "ternary" } }"#).is_err());
    }

    #[test_log::test]
    fn test_load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/slicebar.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
