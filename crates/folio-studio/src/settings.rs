//! Studio settings - persisted user preferences.
//!
//! Settings are stored as TOML in the user's config directory. Every section
//! falls back to defaults, so a partial file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use folio_client::ClientConfig;

use crate::error::{Result, StudioError};

/// Default time a notification stays visible.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 6000;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Studio settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    /// Persistence API connection.
    pub api: ClientConfig,

    /// Notification display.
    pub notifications: NotificationSettings,
}

impl StudioSettings {
    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(StudioError::settings_load)?;
        toml::from_str(&content).map_err(StudioError::settings_load)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StudioError::settings_save(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(StudioError::settings_save)?;
        std::fs::write(path, content).map_err(StudioError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "Folio", "FolioStudio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// NOTIFICATION SETTINGS
// =============================================================================

/// How long transient notifications stay on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Auto-hide delay in milliseconds. Zero keeps notifications until dismissed.
    pub auto_hide_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            auto_hide_ms: DEFAULT_AUTO_HIDE_MS,
        }
    }
}

impl NotificationSettings {
    /// Auto-hide delay, or `None` when notifications stay until dismissed.
    pub fn auto_hide(&self) -> Option<Duration> {
        (self.auto_hide_ms > 0).then(|| Duration::from_millis(self.auto_hide_ms))
    }
}
