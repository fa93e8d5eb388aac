//! End-to-end run of the report pipeline against a stubbed weather API.

use async_trait::async_trait;
use chrono::{Days, Duration, Local, TimeZone};
use report_core::{
    Report, Units, WeatherApi, WeatherError, generate_reports,
    model::{Coord, CurrentWeather, Forecast, ForecastCity, ForecastSample, MainConditions},
};
use tempfile::TempDir;

struct StubApi;

fn not_found() -> WeatherError {
    WeatherError::Api {
        status: 404,
        reason: "Not Found".to_string(),
    }
}

#[async_trait]
impl WeatherApi for StubApi {
    async fn current_weather(
        &self,
        city: &str,
        _units: Units,
    ) -> Result<CurrentWeather, WeatherError> {
        if city != "Tallinn" {
            return Err(not_found());
        }

        Ok(CurrentWeather {
            name: "Tallinn".to_string(),
            coord: Coord { lat: 59.44, lon: 24.75 },
            main: MainConditions {
                temp: 4.17,
                humidity: 87,
                pressure: 1006,
            },
        })
    }

    async fn forecast(&self, city: &str, _units: Units) -> Result<Forecast, WeatherError> {
        if city != "Tallinn" {
            return Err(not_found());
        }

        // 3-hourly samples spanning five days from noon today, like the live feed.
        let start = Local::now().date_naive().and_hms_opt(12, 0, 0).unwrap();
        let base = Local.from_local_datetime(&start).earliest().unwrap();

        let list = (0..40)
            .map(|i| ForecastSample {
                dt: (base + Duration::hours(3 * i)).timestamp(),
                main: MainConditions {
                    temp: 3.0 + i as f64 * 0.1,
                    humidity: 80,
                    pressure: 1010,
                },
            })
            .collect();

        Ok(Forecast {
            city: ForecastCity {
                name: "Tallinn".to_string(),
            },
            list,
        })
    }
}

#[tokio::test]
async fn writes_a_complete_report_per_city() {
    let out = TempDir::new().unwrap();
    let cities = vec!["Tallinn".to_string()];

    let paths = generate_reports(&StubApi, &cities, Units::Metric, out.path())
        .await
        .unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0], out.path().join("Tallinn.json"));

    let raw = std::fs::read_to_string(&paths[0]).unwrap();
    let report: Report = serde_json::from_str(&raw).unwrap();

    assert_eq!(report.details.city, "Tallinn");
    assert_eq!(report.details.coordinates, "59.44,24.75");
    assert_eq!(report.details.temperature_unit, "Celsius");
    assert_eq!(report.current.temperature, 4.17);
    assert_eq!(report.current.humidity, 87);
    assert_eq!(report.current.pressure, 1006);

    // Exactly three forecast days, consecutive, starting tomorrow.
    assert_eq!(report.forecast.len(), 3);
    let tomorrow = Local::now().date_naive() + Days::new(1);
    for (i, day) in report.forecast.iter().enumerate() {
        assert_eq!(day.date, tomorrow + Days::new(i as u64));
        assert_eq!(day.weather.humidity, 80);
        assert_eq!(day.weather.pressure, 1010);
    }
}

#[tokio::test]
async fn unknown_city_fails_the_whole_run() {
    let out = TempDir::new().unwrap();
    let cities = vec!["Tallinn".to_string(), "Dallinn".to_string()];

    let err = generate_reports(&StubApi, &cities, Units::Metric, out.path())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Api { status: 404, .. }));
    assert!(err.to_string().contains("Not Found"));
}

#[tokio::test]
async fn empty_city_list_is_rejected() {
    let out = TempDir::new().unwrap();

    let err = generate_reports(&StubApi, &[], Units::Metric, out.path())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::MissingCityNames));
}
