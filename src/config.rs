/// New-tab configuration as stored by the extension's options page
use serde::{Deserialize, Serialize};

/// Storage key the configuration lives under
pub const CONFIG_STORAGE_KEY: &str = "config";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiStyle {
    #[default]
    Glass,
    Solid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub style: UiStyle,
    pub foreground_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            style: UiStyle::Glass,
            foreground_color: "#171717".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub enabled: bool,
    pub text_color: String,
    pub placeholder_text_color: String,
    pub focused_border_color: String,
    pub search_icon_color: String,
    pub bookmark_icon_color: String,
    pub select_icon_color: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            enabled: true,
            text_color: "#ffffff".to_string(),
            placeholder_text_color: "#a1a1aa".to_string(),
            focused_border_color: "#e4e4e7".to_string(),
            search_icon_color: "#f43f5e".to_string(),
            bookmark_icon_color: "#3b82f6".to_string(),
            select_icon_color: "#f43f5e".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Class played when the page first appears
    pub initial_type: String,
    /// Class played on the page before navigating to a bookmark
    pub bookmark_type: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            enabled: true,
            initial_type: "animation-down".to_string(),
            bookmark_type: "animation-bookmark".to_string(),
        }
    }
}

/// Root configuration; every section falls back to its defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchConfig,
    pub animations: AnimationConfig,
}

impl Config {
    /// Class to add for the initial page animation, if animations are on
    pub fn initial_animation(&self) -> Option<&str> {
        self.animations
            .enabled
            .then_some(self.animations.initial_type.as_str())
    }

    /// Class to play before opening a bookmark, if animations are on
    pub fn bookmark_animation(&self) -> Option<&str> {
        self.animations
            .enabled
            .then_some(self.animations.bookmark_type.as_str())
    }
}
