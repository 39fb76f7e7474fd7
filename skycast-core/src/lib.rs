//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The forecast fetcher (one GET against the forecast API)
//! - The snapshot builder (raw JSON payload -> immutable snapshot)
//! - Shared domain model (snapshot, icons, errors)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod builder;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;

pub use builder::build_snapshot;
pub use config::Config;
pub use error::{FetchError, ParseError, WeatherError};
pub use fetcher::ForecastClient;
pub use model::{WeatherIcon, WeatherSnapshot};
