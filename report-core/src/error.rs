use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while generating weather reports.
///
/// Every variant aborts the run; there is no recovery or partial-output mode
/// anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("cities file not specified")]
    CitiesFileNotSpecified,

    #[error("cities file is empty: {}", path.display())]
    EmptyCitiesFile { path: PathBuf },

    #[error("cities file is not valid JSON: {}", path.display())]
    InvalidCitiesJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cities file does not contain a JSON array: {}", path.display())]
    NotAnArray { path: PathBuf },

    #[error("cities file contains a non-string entry: {}", path.display())]
    NotArrayOfStrings { path: PathBuf },

    #[error("missing city names")]
    MissingCityNames,

    #[error("invalid units '{0}', expected 'metric' or 'imperial'")]
    InvalidUnits(String),

    #[error("weather API request failed")]
    Request(#[from] reqwest::Error),

    #[error("weather API responded with {status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("weather API response could not be parsed")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("no payload returned for city '{0}'")]
    MissingCityData(String),

    #[error("no forecast samples for {date}")]
    NoForecastSamples { date: NaiveDate },

    #[error("could not determine platform config directory")]
    ConfigDir,

    #[error("failed to parse config file: {}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration")]
    SerializeConfig(#[source] toml::ser::Error),

    #[error("no API key configured; set OPENWEATHER_API_KEY or add `api_key` to {}", path.display())]
    MissingApiKey { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report")]
    Serialize(#[source] serde_json::Error),
}
