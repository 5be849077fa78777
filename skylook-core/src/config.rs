use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::error::{Result, WeatherError};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_REVERSE_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Open-Meteo serves at most 16 days of daily forecast.
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Service endpoints, overridable for self-hosted instances and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding: String,
    pub forecast: String,
    pub reverse_geocoding: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding: DEFAULT_GEOCODING_URL.to_string(),
            forecast: DEFAULT_FORECAST_URL.to_string(),
            reverse_geocoding: DEFAULT_REVERSE_GEOCODING_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "Seoul"
/// language = "en"
/// forecast_days = 7
///
/// [endpoints]
/// forecast = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City used by `skylook show` when no location is given.
    pub default_city: String,

    /// Language for geocoding results, e.g. "en".
    pub language: String,

    pub forecast_days: u8,

    /// Per-request HTTP timeout.
    pub timeout_secs: u64,

    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: "Seoul".to_string(),
            language: "en".to_string(),
            forecast_days: 7,
            timeout_secs: 10,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            return Err(WeatherError::Config(format!(
                "forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {}",
                self.forecast_days
            )));
        }
        if self.timeout_secs == 0 {
            return Err(WeatherError::Config("timeout_secs must be positive".into()));
        }
        if self.language.trim().is_empty() {
            return Err(WeatherError::Config("language must not be empty".into()));
        }
        Ok(())
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            WeatherError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let cfg = Self::from_toml(&contents).map_err(|e| match e {
            WeatherError::Config(msg) => {
                WeatherError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)
            .map_err(|e| WeatherError::Config(format!("Failed to parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WeatherError::Config(format!("Failed to serialize configuration: {e}")))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WeatherError::Config(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        fs::write(&path, self.to_toml()?).map_err(|e| {
            WeatherError::Config(format!("Failed to write config file {}: {e}", path.display()))
        })?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skylook", "skylook").ok_or_else(|| {
            WeatherError::Config("Could not determine platform config directory".into())
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
