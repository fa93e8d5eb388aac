use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::WeatherError, model::Report};

/// Destination file for one city's report.
pub fn report_file_path(output_dir: &Path, city: &str) -> PathBuf {
    output_dir.join(format!("{city}.json"))
}

/// Writes the pretty-printed report, creating the directory tree as needed.
///
/// An existing file at the path is overwritten. No atomic-write protection.
pub fn write_report(path: &Path, report: &Report) -> Result<(), WeatherError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| WeatherError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(report).map_err(WeatherError::Serialize)?;

    fs::write(path, json).map_err(|source| WeatherError::Write {
        path: path.to_path_buf(),
        source,
    })
}
