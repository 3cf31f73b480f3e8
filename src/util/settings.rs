//! Startup settings read from the platform config directory.
//!
//! The file is optional and never written back; estimates themselves are not
//! persisted between sessions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "EstimateBuilder";
const APP_NAME: &str = "EstimateBuilder";

pub const DEFAULT_MARKUP_RATE: f64 = 30.0;

static CURRENT: OnceLock<Settings> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Markup percentage a new session starts with.
    pub default_markup_rate: f64,
    /// Appended to formatted money values.
    pub currency_suffix: String,
    /// `tracing` filter directive, overridden by `ESTIMATE_LOG`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_markup_rate: DEFAULT_MARKUP_RATE,
            currency_suffix: "원".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("default markup rate must be a number of at least 0 (got {0})")]
    InvalidMarkupRate(f64),
}

pub fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn parse_settings(data: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = serde_json::from_str(data)?;
    let rate = settings.default_markup_rate;
    if !rate.is_finite() || rate < 0.0 {
        return Err(SettingsError::InvalidMarkupRate(rate));
    }
    Ok(settings)
}

pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = fs::read_to_string(path)?;
    parse_settings(&data)
}

/// Loads settings, falling back to defaults when the file is missing or bad.
pub fn load_settings() -> Settings {
    let Some(path) = settings_file() else {
        return Settings::default();
    };

    match read_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "ignoring settings file: {err}");
            Settings::default()
        }
    }
}

/// Settings for this process, loaded on first use.
pub fn current() -> &'static Settings {
    CURRENT.get_or_init(load_settings)
}
