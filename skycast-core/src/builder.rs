//! Snapshot builder: raw forecast JSON in, [`WeatherSnapshot`] out.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::error::ParseError;
use crate::model::{WeatherIcon, WeatherSnapshot};

#[derive(Debug, Deserialize)]
struct ForecastDoc {
    timezone: String,
    currently: Currently,
}

#[derive(Debug, Deserialize)]
struct Currently {
    time: i64,
    summary: String,
    icon: String,
    #[serde(rename = "precipProbability")]
    precip_probability: f64,
    temperature: f64,
    humidity: f64,
}

/// Build a [`WeatherSnapshot`] from the raw forecast payload.
///
/// The payload must carry a top-level `timezone` string and a
/// `currently` object with the six observation fields. Anything
/// missing or mistyped is a [`ParseError`]; nothing is defaulted.
/// Unknown icon codes are the one exception and resolve to the
/// unavailable icon.
pub fn build_snapshot(json: &str) -> Result<WeatherSnapshot, ParseError> {
    let doc: ForecastDoc = serde_json::from_str(json)?;

    let timezone: Tz = doc
        .timezone
        .parse()
        .map_err(|_| ParseError::UnknownTimezone(doc.timezone.clone()))?;

    let time = DateTime::from_timestamp(doc.currently.time, 0)
        .ok_or(ParseError::InvalidTimestamp(doc.currently.time))?;

    let icon = WeatherIcon::from_code(&doc.currently.icon);

    debug!(%timezone, icon = %doc.currently.icon, "built weather snapshot");

    Ok(WeatherSnapshot::new(
        doc.currently.temperature,
        doc.currently.humidity,
        doc.currently.precip_probability,
        time,
        icon,
        doc.currently.summary,
        timezone,
    ))
}
