use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, Forecast, Units},
};

use super::WeatherApi;

const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather current-weather and 5-day forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    api_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Client against a non-default base URL.
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            http: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: Units,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.api_url, endpoint);

        debug!(city, endpoint, "requesting weather data");

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("units", units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            return Err(WeatherError::Api {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = res.text().await?;

        serde_json::from_str(&body).map_err(WeatherError::InvalidPayload)
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn current_weather(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, WeatherError> {
        self.get("weather", city, units).await
    }

    async fn forecast(&self, city: &str, units: Units) -> Result<Forecast, WeatherError> {
        self.get("forecast", city, units).await
    }
}
