use std::io::{Write, stderr};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;
use skycast_core::{Config, ForecastClient, WeatherSnapshot};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather conditions in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the forecast API key and an optional default location.
    Configure,

    /// Fetch and show current conditions.
    Show {
        /// Latitude in decimal degrees; defaults to the configured location.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees; defaults to the configured location.
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon } => show(lat, lon).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("Forecast API key:")
        .prompt()
        .context("Failed to read API key")?;
    config.api_key = Some(api_key.trim().to_string());

    let lat = Text::new("Default latitude (blank to keep current):")
        .prompt()
        .context("Failed to read latitude")?;
    if !lat.trim().is_empty() {
        config.latitude = Some(lat.trim().parse().context("Latitude must be a number")?);
    }

    let lon = Text::new("Default longitude (blank to keep current):")
        .prompt()
        .context("Failed to read longitude")?;
    if !lon.trim().is_empty() {
        config.longitude = Some(lon.trim().parse().context("Longitude must be a number")?);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.api_key()?;

    let (default_lat, default_lon) = config.location();
    let latitude = lat.unwrap_or(default_lat);
    let longitude = lon.unwrap_or(default_lon);

    let client = ForecastClient::new(api_key.to_owned());
    debug!(latitude, longitude, "fetching current conditions");

    // Busy indicator on stderr; cleared again on success and failure alike.
    eprint!("Fetching current conditions... ");
    let _ = stderr().flush();
    let result = client.current_conditions(latitude, longitude).await;
    eprint!("\r                               \r");
    let _ = stderr().flush();

    let snapshot = result.context("Could not get a weather reading")?;
    print!("{}", render(&snapshot));

    Ok(())
}

/// Render the snapshot's display values, one per line.
fn render(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{} {}\nAt {} it will be {:.0}°\nHumidity: {:.2}\nRain/Snow: {:.0}%\n",
        snapshot.icon().glyph(),
        snapshot.summary(),
        snapshot.formatted_time(),
        snapshot.temperature(),
        snapshot.humidity(),
        snapshot.precip_percent(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::build_snapshot;

    fn sample_snapshot() -> WeatherSnapshot {
        let payload = serde_json::json!({
            "timezone": "America/Los_Angeles",
            "currently": {
                "time": 1_609_459_200,
                "summary": "Partly Cloudy",
                "icon": "partly-cloudy-day",
                "precipProbability": 0.25,
                "temperature": 57.3,
                "humidity": 0.88
            }
        })
        .to_string();

        build_snapshot(&payload).expect("sample payload is valid")
    }

    #[test]
    fn render_shows_every_display_value() {
        let out = render(&sample_snapshot());

        assert!(out.contains("Partly Cloudy"));
        assert!(out.contains("At 4:00 PM it will be 57°"));
        assert!(out.contains("Humidity: 0.88"));
        assert!(out.contains("Rain/Snow: 25%"));
    }
}
