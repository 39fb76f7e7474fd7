use reqwest::StatusCode;
use thiserror::Error;

/// Failure while talking to the forecast endpoint.
///
/// One attempt only: there is no retry policy, so every variant is
/// terminal for the fetch that produced it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Failure while turning a raw payload into a [`WeatherSnapshot`].
///
/// A missing or mistyped field is surfaced here rather than defaulted;
/// callers never see a partially populated snapshot.
///
/// [`WeatherSnapshot`]: crate::model::WeatherSnapshot
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed forecast payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("observation timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("unknown IANA timezone '{0}'")]
    UnknownTimezone(String),
}

/// Either failure kind of one fetch-and-parse cycle.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
