//! Configuration file support for the detox tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/biosculpter-detox/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Longest cycle accepted, in days (one century)
pub const MAX_DURATION_DAYS: f64 = 36_500.0;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cycle: CycleConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Treatment cycle configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_duration_days")]
    pub duration_days: f64,

    #[serde(default = "default_required_research")]
    pub required_research: Vec<String>,

    #[serde(default = "default_icon_path")]
    pub icon_path: String,

    /// RGB, each channel in 0.0..=1.0
    #[serde(default = "default_operating_color")]
    pub operating_color: [f32; 3],
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            label: default_label(),
            description: default_description(),
            duration_days: default_duration_days(),
            required_research: default_required_research(),
            icon_path: default_icon_path(),
            operating_color: default_operating_color(),
        }
    }
}

/// Extra catalog ids merged into the built-in tables at startup
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub extra_addictions: Vec<String>,

    #[serde(default)]
    pub extra_withdrawals: Vec<String>,

    #[serde(default)]
    pub extra_exclusions: Vec<String>,
}

// Default value functions
fn default_key() -> String {
    "detox".into()
}

fn default_label() -> String {
    "detox".into()
}

fn default_description() -> String {
    "Purge drug addictions, withdrawal effects and chemical tolerances from the occupant. \
     Luciferium dependency cannot be removed."
        .into()
}

fn default_duration_days() -> f64 {
    12.0
}

fn default_required_research() -> Vec<String> {
    vec!["Bioregeneration".into()]
}

fn default_icon_path() -> String {
    "UI/Commands/Detox".into()
}

fn default_operating_color() -> [f32; 3] {
    [0.2, 0.8, 0.2]
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("biosculpter-detox").join("config.toml"))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.cycle.key.trim().is_empty() {
            return Err(Error::Config("cycle.key must not be empty".into()));
        }
        let days = self.cycle.duration_days;
        if !(days.is_finite() && days > 0.0 && days <= MAX_DURATION_DAYS) {
            return Err(Error::Config(format!(
                "cycle.duration_days must be within (0, {}], got {}",
                MAX_DURATION_DAYS, days
            )));
        }
        if self
            .cycle
            .operating_color
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
        {
            return Err(Error::Config(
                "cycle.operating_color channels must be within 0.0..=1.0".into(),
            ));
        }
        Ok(())
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
