//! # Theme Module
//!
//! Dark/light mode for the whole site. Dark is the default, and the only
//! way to change it is `toggle()`.
//!
//! The ambient presentation (page colours and the `dark` root class) is a
//! pure function of the mode, so callers derive it from the value `toggle()`
//! returns rather than reading the state back.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Page-level colours applied for this mode.
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                background: "#000000".to_string(),
                foreground: "#FFFFFF".to_string(),
                root_class: Some("dark".to_string()),
            },
            ThemeMode::Light => Palette {
                background: "#FFFFFF".to_string(),
                foreground: "#000000".to_string(),
                root_class: None,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ambient presentation for a theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    /// Class set on the document root, if any.
    pub root_class: Option<String>,
}

/// Theme toggle state for one view session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeViewState {
    mode: ThemeMode,
}

impl ThemeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the mode and returns the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let theme = ThemeViewState::new();
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(
            theme.current().palette().root_class.as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_toggle_returns_new_mode() {
        let mut theme = ThemeViewState::new();

        let mode = theme.toggle();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(theme.current(), ThemeMode::Light);

        let palette = mode.palette();
        assert_eq!(palette.background, "#FFFFFF");
        assert_eq!(palette.foreground, "#000000");
        assert!(palette.root_class.is_none());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut theme = ThemeViewState::new();
        let before = theme.current();
        theme.toggle();
        theme.toggle();
        assert_eq!(theme.current(), before);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }
}
