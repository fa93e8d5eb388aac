use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Measurement system accepted by the weather API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Label for the temperature unit implied by the measurement system.
    pub fn temperature_unit(&self) -> &'static str {
        match self {
            Units::Metric => "Celsius",
            Units::Imperial => "Fahrenheit",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WeatherError::InvalidUnits(value.to_string())),
        }
    }
}

impl std::str::FromStr for Units {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::try_from(s)
    }
}

/// Coordinate block of a current-weather payload.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Temperature/humidity/pressure block shared by current and forecast payloads.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MainConditions {
    pub temp: f64,
    pub humidity: u32,
    pub pressure: u32,
}

/// Current-weather payload for one city, as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub coord: Coord,
    pub main: MainConditions,
}

/// One timestamped 3-hour forecast sample.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ForecastSample {
    /// Unix timestamp, seconds.
    pub dt: i64,
    pub main: MainConditions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCity {
    pub name: String,
}

/// 5-day/3-hour forecast payload for one city.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub city: ForecastCity,
    pub list: Vec<ForecastSample>,
}

/// Static details of a city report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub city: String,
    /// Formatted as `"<lat>,<lon>"`, no space.
    pub coordinates: String,
    pub temperature_unit: String,
}

/// Snapshot of the current conditions for one city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: u32,
    pub pressure: u32,
}

/// Weather readings averaged over one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragedConditions {
    /// Rounded to two decimal places.
    pub temperature: f64,
    pub humidity: u32,
    pub pressure: u32,
}

/// Average weather for one future calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayAverage {
    pub date: NaiveDate,
    pub weather: AveragedConditions,
}

/// Full per-city report as persisted to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub details: ReportDetails,
    pub current: CurrentConditions,
    /// Tomorrow, the day after, and two days after, in that order.
    pub forecast: Vec<DayAverage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_as_str_roundtrip() {
        for units in [Units::Metric, Units::Imperial] {
            let parsed = Units::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(units, parsed);
        }
    }

    #[test]
    fn units_parsing_is_case_insensitive() {
        assert_eq!(Units::try_from("Metric").unwrap(), Units::Metric);
        assert_eq!(Units::try_from("IMPERIAL").unwrap(), Units::Imperial);
    }

    #[test]
    fn unknown_units_are_rejected() {
        for value in ["standard", "kelvin", ""] {
            let err = Units::try_from(value).unwrap_err();
            assert!(matches!(err, WeatherError::InvalidUnits(_)));
        }
    }

    #[test]
    fn temperature_unit_labels() {
        assert_eq!(Units::Metric.temperature_unit(), "Celsius");
        assert_eq!(Units::Imperial.temperature_unit(), "Fahrenheit");
    }

    #[test]
    fn current_weather_payload_deserializes() {
        let json = r#"{
            "coord": {"lon": 24.75, "lat": 59.44},
            "main": {"temp": 4.17, "pressure": 1006, "humidity": 87, "temp_min": 3.33},
            "name": "Tallinn",
            "cod": 200
        }"#;

        let weather: CurrentWeather = serde_json::from_str(json).unwrap();

        assert_eq!(weather.name, "Tallinn");
        assert_eq!(weather.coord.lat, 59.44);
        assert_eq!(weather.main.humidity, 87);
    }

    #[test]
    fn forecast_payload_deserializes() {
        let json = r#"{
            "cod": "200",
            "list": [
                {"dt": 1700000000, "main": {"temp": 1.5, "pressure": 1011, "humidity": 93}},
                {"dt": 1700010800, "main": {"temp": 1.9, "pressure": 1012, "humidity": 90}}
            ],
            "city": {"id": 588409, "name": "Tallinn", "country": "EE"}
        }"#;

        let forecast: Forecast = serde_json::from_str(json).unwrap();

        assert_eq!(forecast.city.name, "Tallinn");
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].dt, 1_700_000_000);
    }
}
