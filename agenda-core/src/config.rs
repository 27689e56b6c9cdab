//! Configuration loading and path resolution.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AgendaError, AgendaResult};
use crate::store::EVENTS_FILE;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory holding the persisted event collection
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Reminder offset applied when `add` is not given one explicitly
    #[serde(default = "default_reminder_minutes")]
    pub default_reminder_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            default_reminder_minutes: default_reminder_minutes(),
        }
    }
}

impl Config {
    /// Path of the persisted event collection.
    pub fn events_path(&self) -> PathBuf {
        expand_path(&self.data_dir).join(EVENTS_FILE)
    }
}

fn default_data_dir() -> String {
    "~/.local/share/agenda".to_string()
}

fn default_reminder_minutes() -> u32 {
    10
}

/// Get the config directory path (~/.config/agenda)
pub fn config_dir() -> AgendaResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("agenda"))
        .ok_or_else(|| AgendaError::Config("Could not determine config directory".to_string()))
}

/// Get the config file path (~/.config/agenda/config.toml)
pub fn config_path() -> AgendaResult<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/agenda/config.toml.
/// A missing file yields the defaults.
pub fn load_config() -> AgendaResult<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| AgendaError::Config(format!("{}: {}", path.display(), e)))
}

/// Expand a leading ~ to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
