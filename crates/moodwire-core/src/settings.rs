use serde::{Deserialize, Serialize};

use crate::category::NewsCategory;
use crate::error::ThresholdError;
use crate::thresholds::{validate, TemperatureThresholds};
use crate::units::TemperatureUnit;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// User preferences that parameterize a refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub temperature_unit: TemperatureUnit,
    /// May be empty: that disables news entirely and is not an error.
    pub selected_news_categories: Vec<NewsCategory>,
    pub temperature_thresholds: TemperatureThresholds,
    /// Fixed coordinates. When unset the location provider is asked.
    pub location: Option<Coordinates>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            selected_news_categories: vec![NewsCategory::General],
            temperature_thresholds: TemperatureThresholds::default(),
            location: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn news_enabled(&self) -> bool {
        !self.selected_news_categories.is_empty()
    }

    /// Validate and store new thresholds.
    ///
    /// # Errors
    ///
    /// Returns the [`ThresholdError`] from validation; the previously stored
    /// thresholds stay in effect.
    pub fn save_thresholds(&mut self, cold: f64, hot: f64) -> Result<(), ThresholdError> {
        self.temperature_thresholds = validate(cold, hot)?;
        Ok(())
    }

    pub fn reset_thresholds(&mut self) {
        self.temperature_thresholds = TemperatureThresholds::default();
    }

    /// Replace the category selection, dropping repeats but keeping the
    /// caller's order.
    pub fn set_categories<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = NewsCategory>,
    {
        let mut selected: Vec<NewsCategory> = Vec::new();
        for category in categories {
            if !selected.contains(&category) {
                selected.push(category);
            }
        }
        self.selected_news_categories = selected;
    }

    /// Whether moving from `previous` to `self` invalidates the last refresh.
    ///
    /// Unit, categories and thresholds feed the cycle; the fixed location is
    /// read fresh every cycle anyway.
    #[must_use]
    pub fn requires_refresh(&self, previous: &Settings) -> bool {
        self.temperature_unit != previous.temperature_unit
            || self.selected_news_categories != previous.selected_news_categories
            || self.temperature_thresholds != previous.temperature_thresholds
    }
}
