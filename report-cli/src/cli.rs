use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use report_core::{Config, OpenWeatherClient, Units, generate_reports, read_cities_file};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-report",
    version,
    about = "Generates per-city weather report files"
)]
pub struct Cli {
    /// Path to a JSON file holding an array of city names.
    pub cities_file: Option<PathBuf>,

    /// Directory the per-city report files are written to.
    #[arg(default_value = "./output")]
    pub output_dir: PathBuf,

    /// Measurement system, "metric" or "imperial".
    #[arg(long, default_value_t = Units::Metric)]
    pub units: Units,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Some(cities_file) = self.cities_file else {
            // Missing input file prints usage and exits cleanly.
            Cli::command().print_help()?;
            return Ok(());
        };

        let config = Config::load()?;
        let api_key = config.resolve_api_key()?;

        let client = match &config.api_url {
            Some(url) => OpenWeatherClient::with_api_url(api_key, url.clone()),
            None => OpenWeatherClient::new(api_key),
        };

        let cities = read_cities_file(&cities_file)?;

        let written = generate_reports(&client, &cities, self.units, &self.output_dir).await?;

        println!(
            "Wrote {} report(s) to {}",
            written.len(),
            self.output_dir.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_args_and_units() {
        let cli = Cli::parse_from(["weather-report", "cities.json", "out", "--units", "imperial"]);

        assert_eq!(cli.cities_file, Some(PathBuf::from("cities.json")));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.units, Units::Imperial);
    }

    #[test]
    fn output_dir_and_units_default() {
        let cli = Cli::parse_from(["weather-report", "cities.json"]);

        assert_eq!(cli.output_dir, PathBuf::from("./output"));
        assert_eq!(cli.units, Units::Metric);
    }

    #[test]
    fn no_arguments_parse_without_a_cities_file() {
        let cli = Cli::parse_from(["weather-report"]);
        assert!(cli.cities_file.is_none());
    }

    #[test]
    fn invalid_units_are_rejected_at_parse() {
        let res = Cli::try_parse_from(["weather-report", "cities.json", "--units", "kelvin"]);
        assert!(res.is_err());
    }
}
