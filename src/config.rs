use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::state::expansion::DEFAULT_STORAGE_KEY;

pub const DEFAULT_API_BASE_URL: &str = "https://api.taskdeck.app";

const CONFIG_FILE: &str = "config.json";

static CONFIG_DIR: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join("taskdeck")));

/// Application configuration, loaded from a JSON file in the user's config
/// directory. A missing or unreadable file falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub sidebar_storage_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            sidebar_storage_key: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let Some(dir) = config_dir() else {
            warn!("could not resolve a config directory, using default configuration");
            return Self::default();
        };

        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return Self::load_from(&path);
        }

        // First run: materialize the default file so users can edit it.
        let config = Self::default();
        if let Err(error) = config.save_to(&path) {
            warn!("could not write default configuration: {error:#}");
        }
        config
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(error) => {
                    warn!("discarding malformed configuration at {path:?}: {error}");
                    Self::default()
                }
            },
            Err(error) => {
                warn!("could not read configuration at {path:?}: {error}");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {parent:?}"))?;
        }

        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write configuration {path:?}"))
    }

    /// Storage slot for the sidebar's persisted expand/collapse map.
    pub fn storage_key(&self) -> &str {
        self.sidebar_storage_key
            .as_deref()
            .unwrap_or(DEFAULT_STORAGE_KEY)
    }
}

pub fn config_dir() -> Option<&'static Path> {
    CONFIG_DIR.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage_key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{not json").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.api_token = Some("tok_123".into());
        config.sidebar_storage_key = Some("custom-slot".into());
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.api_token.as_deref(), Some("tok_123"));
        assert_eq!(loaded.storage_key(), "custom-slot");
    }
}
