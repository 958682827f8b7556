// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use clipdeck::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.playback.default_volume = Some(0.5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.playback.default_volume, Some(0.5));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::video::{PlaybackRate, Volume};
use crate::error::Result;
use crate::tracing_setup::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "clipdeck";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Preferences applied to every newly attached native player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub default_volume: Option<f32>,
    #[serde(default)]
    pub default_playback_rate: Option<f64>,
    #[serde(default)]
    pub source_cache_capacity: Option<usize>,
}

impl Config {
    /// Returns the configured log level, falling back to `error`.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
            .as_deref()
            .map(LogLevel::parse_lenient)
            .unwrap_or_default()
    }

    /// Returns the initial volume, clamped to the valid range.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.playback
            .default_volume
            .map(Volume::new)
            .unwrap_or_default()
    }

    /// Returns the initial playback rate.
    ///
    /// A rate outside the accepted set is ignored and the default is used.
    #[must_use]
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback
            .default_playback_rate
            .and_then(PlaybackRate::new)
            .unwrap_or_default()
    }

    /// Returns the source cache capacity, clamped to the supported bounds.
    #[must_use]
    pub fn source_cache_capacity(&self) -> usize {
        self.playback
            .source_cache_capacity
            .unwrap_or(DEFAULT_SOURCE_CACHE_CAPACITY)
            .clamp(MIN_SOURCE_CACHE_CAPACITY, MAX_SOURCE_CACHE_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
