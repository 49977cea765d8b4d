//! Runtime configuration
//!
//! Every field has a default, so an empty TOML document (or no document at
//! all) yields the stock behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::{data, ui};
use crate::error::ConfigError;
use crate::model::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Data document location, relative to the page
    pub data_url: String,
    /// Toast auto-hide delay in milliseconds
    pub toast_duration_ms: u64,
    /// Storage key for the theme preference
    pub theme_storage_key: String,
    /// Theme used when nothing valid is persisted
    pub default_theme: Theme,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_url: data::DATA_URL.to_string(),
            toast_duration_ms: ui::TOAST_DURATION.as_millis() as u64,
            theme_storage_key: ui::THEME_STORAGE_KEY.to_string(),
            default_theme: Theme::Dark,
        }
    }
}

impl FolioConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
