use std::{env, fs, path::PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API key for the OpenWeather endpoints.
    ///
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,

    /// Override for the API base URL, e.g. a local mirror.
    pub api_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self, WeatherError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| WeatherError::Read {
            path: path.clone(),
            source,
        })?;

        let cfg: Config = toml::from_str(&contents)
            .map_err(|source| WeatherError::InvalidConfig { path, source })?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<(), WeatherError> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| WeatherError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml = toml::to_string_pretty(self).map_err(WeatherError::SerializeConfig)?;

        fs::write(&path, toml).map_err(|source| WeatherError::Write { path, source })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, WeatherError> {
        let dirs = ProjectDirs::from("dev", "weather-report", "weather-report")
            .ok_or(WeatherError::ConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key resolution: the environment variable wins over the config file.
    pub fn resolve_api_key(&self) -> Result<String, WeatherError> {
        let env_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        self.api_key_or(env_key)
    }

    fn api_key_or(&self, env_key: Option<String>) -> Result<String, WeatherError> {
        env_key
            .or_else(|| self.api_key.clone())
            .ok_or_else(|| WeatherError::MissingApiKey {
                path: Self::config_file_path().unwrap_or_else(|_| PathBuf::from("config.toml")),
            })
    }
}
