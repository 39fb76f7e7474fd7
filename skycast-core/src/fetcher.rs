//! Forecast fetcher: one GET against the forecast endpoint.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::builder::build_snapshot;
use crate::error::{FetchError, WeatherError};
use crate::model::WeatherSnapshot;

const FORECAST_API_BASE: &str = "https://api.pirateweather.net";

/// Client for the forecast API.
///
/// Holds one [`reqwest::Client`] and the API key. Coordinates are not
/// validated here; out-of-range latitude/longitude is a caller error.
/// Requests are single-shot with the client's stock timeout behavior:
/// no retries, no cancellation, and nothing stops a caller from issuing
/// a second fetch while one is in flight.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: FORECAST_API_BASE.to_string(),
        }
    }

    /// Same client against a different host, for tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url,
        }
    }

    /// Issue the single GET and return the raw response body.
    ///
    /// Transport failures surface as [`FetchError::Network`]; a non-2xx
    /// status as [`FetchError::Status`] with a truncated body excerpt.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_raw(&self, latitude: f64, longitude: f64) -> Result<String, FetchError> {
        let url = format!(
            "{}/forecast/{}/{},{}",
            self.base_url, self.api_key, latitude, longitude
        );

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        debug!(bytes = body.len(), "forecast response received");
        Ok(body)
    }

    /// Fetch-and-parse pipeline with a single completion point.
    ///
    /// Returns a caller-owned snapshot; the builder is never invoked
    /// when the fetch itself fails.
    pub async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let body = self.fetch_raw(latitude, longitude).await?;
        let snapshot = build_snapshot(&body)?;
        Ok(snapshot)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multibyte text never splits.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}
