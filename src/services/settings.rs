//! Settings loading.
//!
//! Reads the optional TOML configuration file from the platform config
//! directory and falls back to defaults when it is absent. The prototype
//! never writes settings back; the file is hand-edited.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Resolve the per-user settings file path, if the platform exposes one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "superos-calendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load settings from a specific file.
///
/// A missing file yields defaults; a present-but-broken file is an error so
/// a typo does not silently revert the grid configuration.
pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        log::info!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate().map_err(SettingsError::Invalid)?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the default location, falling back to defaults on
/// any failure (the prototype should still launch with a broken file).
pub fn load_or_default() -> Settings {
    let Some(path) = default_settings_path() else {
        return Settings::default();
    };
    match load_from_path(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Using default settings: {err}");
            Settings::default()
        }
    }
}
