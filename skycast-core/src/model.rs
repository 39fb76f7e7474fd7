use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Display icon resolved from the forecast `icon` code.
///
/// Codes outside the fixed vocabulary resolve to [`WeatherIcon::Unavailable`]
/// instead of failing; an odd icon should never sink an otherwise good
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Unavailable,
}

impl WeatherIcon {
    /// Resolve a raw icon code. Total: unknown codes map to `Unavailable`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear-day" => Self::ClearDay,
            "clear-night" => Self::ClearNight,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "sleet" => Self::Sleet,
            "wind" => Self::Wind,
            "fog" => Self::Fog,
            "cloudy" => Self::Cloudy,
            "partly-cloudy-day" => Self::PartlyCloudyDay,
            "partly-cloudy-night" => Self::PartlyCloudyNight,
            _ => Self::Unavailable,
        }
    }

    /// Stable identifier of the display asset for this icon.
    pub fn asset(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear_day",
            Self::ClearNight => "clear_night",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Sleet => "sleet",
            Self::Wind => "wind",
            Self::Fog => "fog",
            Self::Cloudy => "cloudy",
            Self::PartlyCloudyDay => "partly_cloudy_day",
            Self::PartlyCloudyNight => "partly_cloudy_night",
            Self::Unavailable => "unavailable",
        }
    }

    /// Terminal glyph used by the CLI renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ClearDay => "☀",
            Self::ClearNight => "🌙",
            Self::Rain => "🌧",
            Self::Snow => "❄",
            Self::Sleet => "🌨",
            Self::Wind => "💨",
            Self::Fog => "🌫",
            Self::Cloudy => "☁",
            Self::PartlyCloudyDay => "⛅",
            Self::PartlyCloudyNight => "☁",
            Self::Unavailable => "·",
        }
    }
}

/// One immutable weather reading at a point in time.
///
/// All fields are populated together by the snapshot builder from a
/// single payload; there are no setters and no partial states. A new
/// fetch produces a fresh snapshot and the caller simply drops the old
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    temperature: f64,
    humidity: f64,
    precip_chance: f64,
    time: DateTime<Utc>,
    icon: WeatherIcon,
    summary: String,
    timezone: Tz,
}

impl WeatherSnapshot {
    pub(crate) fn new(
        temperature: f64,
        humidity: f64,
        precip_chance: f64,
        time: DateTime<Utc>,
        icon: WeatherIcon,
        summary: String,
        timezone: Tz,
    ) -> Self {
        Self { temperature, humidity, precip_chance, time, icon, summary, timezone }
    }

    /// Temperature in degrees Fahrenheit, as delivered by the API.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity as a fraction in 0.0–1.0.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Precipitation probability as a fraction in 0.0–1.0.
    pub fn precip_chance(&self) -> f64 {
        self.precip_chance
    }

    /// Precipitation probability scaled for display (0–100).
    pub fn precip_percent(&self) -> f64 {
        self.precip_chance * 100.0
    }

    /// Instant of the observation.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn icon(&self) -> WeatherIcon {
        self.icon
    }

    /// Free-text short description, e.g. "Partly Cloudy".
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// IANA timezone the observation belongs to.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Observation time as a short wall-clock string in the snapshot's
    /// own timezone, e.g. "4:00 PM". The machine-local zone is never
    /// consulted.
    pub fn formatted_time(&self) -> String {
        self.time.with_timezone(&self.timezone).format("%-I:%M %p").to_string()
    }
}
