use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::WeatherError,
    model::Units,
    provider::{WeatherApi, fetch_current_weather, fetch_weather_forecast},
    report::build_report,
    writer::{report_file_path, write_report},
};

/// Generates and persists one report per city, returning the written paths.
///
/// Current-weather requests for all cities go out as one concurrent batch,
/// then all forecast requests as a second batch. Payloads are correlated back
/// to the requested cities by the name the API returned. Reports are written
/// sequentially afterwards; the first failure aborts the run.
pub async fn generate_reports(
    api: &dyn WeatherApi,
    cities: &[String],
    units: Units,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, WeatherError> {
    let weather_list = fetch_current_weather(api, cities, units).await?;
    let forecast_list = fetch_weather_forecast(api, cities, units).await?;

    debug!(cities = cities.len(), "fetched weather and forecast payloads");

    let mut written = Vec::with_capacity(cities.len());

    for city in cities {
        let weather = weather_list
            .iter()
            .find(|data| data.name == *city)
            .ok_or_else(|| WeatherError::MissingCityData(city.clone()))?;

        let forecast = forecast_list
            .iter()
            .find(|data| data.city.name == *city)
            .ok_or_else(|| WeatherError::MissingCityData(city.clone()))?;

        let report = build_report(weather, forecast, units)?;

        let path = report_file_path(output_dir, city);
        write_report(&path, &report)?;

        info!(city = city.as_str(), path = %path.display(), "report written");

        written.push(path);
    }

    Ok(written)
}
