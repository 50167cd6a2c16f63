use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::SettingsResult;
use crate::i18n::Locale;
use crate::utils::file_utils;

/// User preferences, provided to the component tree as context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read settings from the user's settings file
    pub fn load() -> SettingsResult<Settings> {
        let path = file_utils::settings_path()?;
        Settings::load_from(&path)
    }
}

/// Load the user's settings, falling back to defaults when the file is unusable
pub fn load_or_default() -> Settings {
    match Settings::load() {
        Ok(settings) => {
            tracing::info!("Loaded settings, locale: {}", settings.locale.code());
            settings
        }
        Err(e) => {
            tracing::warn!("Using default settings: {}", e);
            Settings::default()
        }
    }
}
