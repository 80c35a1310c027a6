//! Settings resolution for commands that classify or fetch.
//!
//! Starts from the settings file when one is configured, otherwise the
//! defaults, then applies command-line overrides on top.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use moodwire_core::{Coordinates, NewsCategory, Settings, TemperatureUnit};

#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// Settings file (YAML); overrides MOODWIRE_SETTINGS_PATH
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Temperature unit (celsius or fahrenheit)
    #[arg(long)]
    pub unit: Option<TemperatureUnit>,
    /// News categories, comma-separated or repeated
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<NewsCategory>,
    /// Turn news off entirely
    #[arg(long, conflicts_with = "categories")]
    pub no_news: bool,
    /// Cold threshold in °C
    #[arg(long, allow_hyphen_values = true)]
    pub cold: Option<f64>,
    /// Hot threshold in °C
    #[arg(long, allow_hyphen_values = true)]
    pub hot: Option<f64>,
    /// Latitude; requires --lon
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude; requires --lat
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl SettingsArgs {
    /// Builds the effective settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// the threshold overrides are invalid.
    pub fn resolve(&self, configured_path: Option<&Path>) -> anyhow::Result<Settings> {
        let path = self.settings.as_deref().or(configured_path);
        let mut settings = match path {
            Some(path) => moodwire_core::load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(unit) = self.unit {
            settings.temperature_unit = unit;
        }
        if self.no_news {
            settings.set_categories(Vec::<NewsCategory>::new());
        } else if !self.categories.is_empty() {
            settings.set_categories(self.categories.iter().copied());
        }
        if self.cold.is_some() || self.hot.is_some() {
            let current = settings.temperature_thresholds;
            settings
                .save_thresholds(
                    self.cold.unwrap_or(current.cold_threshold),
                    self.hot.unwrap_or(current.hot_threshold),
                )
                .context("invalid threshold override")?;
        }
        if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            settings.location = Some(Coordinates {
                latitude,
                longitude,
            });
        }

        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// Settings path from the environment, for commands that do not need API keys.
pub fn env_settings_path() -> Option<PathBuf> {
    std::env::var("MOODWIRE_SETTINGS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
