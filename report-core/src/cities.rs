use std::{fs, path::Path};

use serde_json::Value;

use crate::error::WeatherError;

/// Reads the list of city names from a JSON file.
///
/// The file must contain a JSON array of strings. An empty array is accepted
/// here; the fetch layer rejects it when requests are issued.
pub fn read_cities_file(path: &Path) -> Result<Vec<String>, WeatherError> {
    if path.as_os_str().is_empty() {
        return Err(WeatherError::CitiesFileNotSpecified);
    }

    let raw = fs::read_to_string(path).map_err(|source| WeatherError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if raw.is_empty() {
        return Err(WeatherError::EmptyCitiesFile {
            path: path.to_path_buf(),
        });
    }

    let value: Value = serde_json::from_str(&raw).map_err(|source| {
        WeatherError::InvalidCitiesJson {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let Value::Array(items) = value else {
        return Err(WeatherError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut cities = Vec::with_capacity(items.len());

    for item in items {
        match item {
            Value::String(name) => cities.push(name),
            _ => {
                return Err(WeatherError::NotArrayOfStrings {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(cities)
}
