// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the selector, loaded from the user config dir.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constant::{CONFIG_DIR, CONFIG_FILE};
use crate::domain::{CropError, Result};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the server that receives crop results.
    pub endpoint: String,
    /// Horizontal padding subtracted from the container width before scaling.
    pub container_padding: f32,
    /// Minimum extent (exclusive) in both axes for a selection to be committed.
    pub min_selection: f32,
    /// Delay between a successful save and navigating home, in milliseconds.
    pub redirect_delay_ms: u64,
    /// Location navigated to after a successful save.
    pub home_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            container_padding: 40.0,
            min_selection: 10.0,
            redirect_delay_ms: 1500,
            home_location: "/".to_string(),
        }
    }
}

impl AppConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| CropError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        Self::load(&path).unwrap_or_else(|e| {
            log::error!("Failed to load config: {e}");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_selection.is_nan() || self.min_selection < 0.0 {
            return Err(CropError::Config("min_selection must be >= 0".into()));
        }
        if self.container_padding.is_nan() || self.container_padding < 0.0 {
            return Err(CropError::Config("container_padding must be >= 0".into()));
        }
        Ok(())
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Full URL of the save endpoint.
    pub fn save_url(&self) -> String {
        format!(
            "{}{}",
            self.endpoint.trim_end_matches('/'),
            crate::constant::SAVE_CROP_PATH
        )
    }
}
