//! Configuration file support for wod.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wod/config.toml`.

use crate::{Error, Palette, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub workouts: WorkoutsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Workout document location
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct WorkoutsConfig {
    /// Defaults to `<data_dir>/workouts`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Countdown display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    #[serde(default)]
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            palette: Palette::default(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("wod")
}

fn default_tick_millis() -> u64 {
    1000
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.display.palette.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("wod").join("config.toml")
    }

    /// Directory holding workout documents
    pub fn workouts_dir(&self) -> PathBuf {
        self.workouts
            .dir
            .clone()
            .unwrap_or_else(|| self.data.data_dir.join("workouts"))
    }

    /// Path of the completion journal
    pub fn journal_path(&self) -> PathBuf {
        self.data.data_dir.join("journal.jsonl")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
