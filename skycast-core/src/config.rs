use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Built-in fallback location (Alcatraz Island) used when no default
/// location is configured.
pub const DEFAULT_LATITUDE: f64 = 37.8267;
pub const DEFAULT_LONGITUDE: f64 = -122.4233;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// latitude = 37.8267
/// longitude = -122.4233
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Forecast API key.
    pub api_key: Option<String>,

    /// Optional default location; falls back to the built-in one.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Config {
    /// Return the configured API key, or a hint to run `configure`.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your forecast API key."
            )
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Default coordinates: configured values, or the built-in location.
    pub fn location(&self) -> (f64, f64) {
        (
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
        )
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(!cfg.is_configured());
    }

    #[test]
    fn api_key_returned_when_set() {
        let cfg = Config { api_key: Some("KEY".to_string()), ..Config::default() };

        assert_eq!(cfg.api_key().expect("key must exist"), "KEY");
        assert!(cfg.is_configured());
    }

    #[test]
    fn location_falls_back_to_builtin() {
        let cfg = Config::default();
        assert_eq!(cfg.location(), (DEFAULT_LATITUDE, DEFAULT_LONGITUDE));
    }

    #[test]
    fn location_prefers_configured_coordinates() {
        let cfg = Config {
            latitude: Some(50.45),
            longitude: Some(30.52),
            ..Config::default()
        };

        assert_eq!(cfg.location(), (50.45, 30.52));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            latitude: Some(50.45),
            longitude: Some(30.52),
        };

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let back: Config = toml::from_str(&text).expect("parses back");

        assert_eq!(back.api_key.as_deref(), Some("KEY"));
        assert_eq!(back.location(), (50.45, 30.52));
    }
}
