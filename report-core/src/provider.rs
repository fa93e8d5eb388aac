use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, Forecast, Units},
};

pub mod openweather;

/// Read-only access to the remote weather API.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Current weather for one city.
    async fn current_weather(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, WeatherError>;

    /// 5-day/3-hour forecast for one city.
    async fn forecast(&self, city: &str, units: Units) -> Result<Forecast, WeatherError>;
}

/// Fetches the current weather for every city, all requests in flight at once.
///
/// All-or-nothing: any failed request fails the whole batch.
pub async fn fetch_current_weather(
    api: &dyn WeatherApi,
    cities: &[String],
    units: Units,
) -> Result<Vec<CurrentWeather>, WeatherError> {
    if cities.is_empty() {
        return Err(WeatherError::MissingCityNames);
    }

    join_all(cities.iter().map(|city| api.current_weather(city, units)))
        .await
        .into_iter()
        .collect()
}

/// Fetches the forecast for every city, all requests in flight at once.
///
/// All-or-nothing, like [`fetch_current_weather`].
pub async fn fetch_weather_forecast(
    api: &dyn WeatherApi,
    cities: &[String],
    units: Units,
) -> Result<Vec<Forecast>, WeatherError> {
    if cities.is_empty() {
        return Err(WeatherError::MissingCityNames);
    }

    join_all(cities.iter().map(|city| api.forecast(city, units)))
        .await
        .into_iter()
        .collect()
}
