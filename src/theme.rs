// src/theme.rs

//! Theme tables and the registry that holds them.
//!
//! A `ThemeRegistry` is built once at startup (built-ins plus any themes from the
//! configuration file) and then handed to the renderer by shared reference. It is
//! never mutated while rendering.

use crate::color::{self, Rgb};
use crate::error::RenderError;
use crate::state::StateCode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_BOOLEAN: &str = "default_boolean";
pub const ZEO: &str = "zeo";

/// A named mapping from state code to display color.
///
/// Entries are kept ordered by state code so palette allocation order is
/// deterministic for a given theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: BTreeMap<StateCode, Rgb>,
}

impl Theme {
    pub fn new(name: impl Into<String>, colors: impl IntoIterator<Item = (StateCode, Rgb)>) -> Self {
        Theme {
            name: name.into(),
            colors: colors.into_iter().collect(),
        }
    }

    /// Color for a state, or `UndefinedColorForState` if the theme has none.
    pub fn color_for(&self, state: StateCode) -> Result<Rgb, RenderError> {
        self.colors
            .get(&state)
            .copied()
            .ok_or_else(|| RenderError::UndefinedColorForState {
                theme: self.name.clone(),
                state,
            })
    }

    /// Blue-on-gray scheme for boolean data, with a lighter blue for columns that
    /// mix on and off samples.
    pub fn default_boolean() -> Self {
        Theme::new(
            DEFAULT_BOOLEAN,
            [
                (StateCode::UNINITIALIZED, color::LIGHT_GRAY),
                (StateCode::OFF, color::LIGHT_GRAY),
                (StateCode::ON, color::BLUE),
                (StateCode::PARTIAL, color::LIGHT_BLUE),
            ],
        )
    }

    /// Sleep-stage scheme matching the Zeo hypnogram: 1 wake, 2 REM, 3 light,
    /// 4 deep. Code 0 (no data) renders white like the background.
    pub fn zeo() -> Self {
        Theme::new(
            ZEO,
            [
                (StateCode::UNINITIALIZED, color::WHITE),
                (StateCode(0), color::WHITE),
                (StateCode(1), color::ZEO_WAKE),
                (StateCode(2), color::ZEO_REM),
                (StateCode(3), color::ZEO_LIGHT),
                (StateCode(4), color::ZEO_DEEP),
            ],
        )
    }
}

/// Process-wide collection of themes, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// An empty registry. Most callers want `with_builtins`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `default_boolean` and `zeo`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Theme::default_boolean());
        registry.register(Theme::zeo());
        registry
    }

    /// Insert a theme, replacing any existing theme with the same name.
    pub fn register(&mut self, theme: Theme) {
        debug!(
            "Registering theme '{}' with {} colors",
            theme.name,
            theme.colors.len()
        );
        self.themes.insert(theme.name.clone(), theme);
    }

    pub fn lookup(&self, name: &str) -> Result<&Theme, RenderError> {
        self.themes
            .get(name)
            .ok_or_else(|| RenderError::UnknownTheme(name.to_string()))
    }

    /// Registered theme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
