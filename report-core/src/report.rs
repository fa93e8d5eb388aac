use chrono::{DateTime, Days, Local, NaiveDate};

use crate::{
    error::WeatherError,
    model::{
        AveragedConditions, CurrentConditions, CurrentWeather, DayAverage, Forecast,
        ForecastSample, Report, ReportDetails, Units,
    },
};

/// Number of future days covered by the forecast section.
const FORECAST_DAYS: u64 = 3;

/// Static report header for one city.
pub fn build_details(weather: &CurrentWeather, units: Units) -> ReportDetails {
    ReportDetails {
        city: weather.name.clone(),
        coordinates: format!("{},{}", weather.coord.lat, weather.coord.lon),
        temperature_unit: units.temperature_unit().to_string(),
    }
}

/// Snapshot of the current conditions, straight from the payload.
pub fn build_current(weather: &CurrentWeather) -> CurrentConditions {
    CurrentConditions {
        temperature: weather.main.temp,
        humidity: weather.main.humidity,
        pressure: weather.main.pressure,
    }
}

/// Per-day forecast averages for tomorrow and the two days after, in order.
///
/// Samples are bucketed by the local calendar day they fall on, not by fixed
/// 24-hour windows, so partial first and last days of the feed stay correct.
pub fn build_forecast(forecast: &Forecast) -> Result<Vec<DayAverage>, WeatherError> {
    let today = Local::now().date_naive();

    (1..=FORECAST_DAYS)
        .map(|offset| day_average(&forecast.list, today + Days::new(offset)))
        .collect()
}

/// Average of all samples falling on `date` (local time).
pub fn day_average(
    samples: &[ForecastSample],
    date: NaiveDate,
) -> Result<DayAverage, WeatherError> {
    let day_samples: Vec<&ForecastSample> = samples
        .iter()
        .filter(|sample| sample_date(sample.dt) == Some(date))
        .collect();

    if day_samples.is_empty() {
        return Err(WeatherError::NoForecastSamples { date });
    }

    let count = day_samples.len() as f64;

    let mut temperature = 0.0;
    let mut humidity = 0.0;
    let mut pressure = 0.0;

    for sample in &day_samples {
        temperature += sample.main.temp;
        humidity += f64::from(sample.main.humidity);
        pressure += f64::from(sample.main.pressure);
    }

    Ok(DayAverage {
        date,
        weather: AveragedConditions {
            temperature: round2(temperature / count),
            humidity: (humidity / count).round() as u32,
            pressure: (pressure / count).round() as u32,
        },
    })
}

/// Full report for one city.
pub fn build_report(
    weather: &CurrentWeather,
    forecast: &Forecast,
    units: Units,
) -> Result<Report, WeatherError> {
    Ok(Report {
        details: build_details(weather, units),
        current: build_current(weather),
        forecast: build_forecast(forecast)?,
    })
}

/// Local calendar day a Unix timestamp falls on.
fn sample_date(dt: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(dt, 0).map(|utc| utc.with_timezone(&Local).date_naive())
}

/// Rounds to two decimals, half away from zero, with an epsilon nudge against
/// the representation error of the scaled value.
fn round2(value: f64) -> f64 {
    (value * 100.0 + f64::EPSILON).round() / 100.0
}
