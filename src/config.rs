// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Both fields are optional so a hand-edited file only needs to mention the
//! settings it changes; anything absent falls back to the default.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SplitStage";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether the carousel advances on its own while unzoomed.
    #[serde(default)]
    pub autoplay: Option<bool>,
    /// Brand to open focused on launch (`savvy` or `penny`).
    #[serde(default)]
    pub start_brand: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: Some(true),
            start_brand: None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, honoring an optional directory override from
/// the command line. A missing file yields the defaults.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let path = match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    };
    if let Some(path) = path {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            autoplay: Some(false),
            start_brand: Some("penny".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.autoplay, config.autoplay);
        assert_eq!(loaded.start_brand, config.start_brand);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.autoplay, Some(true));
        assert!(loaded.start_brand.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            autoplay: Some(true),
            start_brand: Some("savvy".to_string()),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_honors_config_dir_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            autoplay: Some(false),
            start_brand: None,
        };
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");

        let loaded = load(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded.autoplay, Some(false));
    }

    #[test]
    fn load_with_missing_override_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded.autoplay, Some(true));
    }

    #[test]
    fn default_config_enables_autoplay() {
        let config = Config::default();
        assert_eq!(config.autoplay, Some(true));
        assert!(config.start_brand.is_none());
    }
}
