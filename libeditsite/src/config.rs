//! Configuration management for Edit Site
//!
//! Configuration only shapes the initial snapshot: feature defaults, the
//! starting preview device, and settings merged in before the first frame.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::store::defaults::preferences_with_overrides;
use crate::store::{reduce, Action, EditSiteState};
use crate::types::{DeviceType, Settings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub preferences: PreferencesConfig,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub device_type: DeviceType,
    /// Event poll interval for the terminal UI
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub features: BTreeMap<String, bool>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            device_type: DeviceType::Desktop,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file at the default location means built-in defaults; a
    /// path named by `EDITSITE_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("EDITSITE_CONFIG") {
            let path = PathBuf::from(shellexpand::tilde(&path).to_string());
            return Self::load_from_path(&path);
        }

        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// First snapshot for a store built from this configuration
    ///
    /// Feature overrides replace the default table; settings and device type
    /// go through the regular reducers.
    pub fn initial_state(&self) -> EditSiteState {
        let state = EditSiteState {
            preferences: preferences_with_overrides(&self.preferences.features),
            ..EditSiteState::default()
        };

        let actions = [
            Action::update_settings(self.settings.clone()),
            Action::set_preview_device_type(self.editor.device_type.clone()),
        ];
        let state = actions
            .iter()
            .fold(std::sync::Arc::new(state), |state, action| reduce(Some(state), action));

        (*state).clone()
    }
}

/// Resolve the configuration file path under the XDG config directory
pub fn resolve_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("editsite").join("config.toml"))
}
