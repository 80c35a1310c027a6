//! Domain types for moodwire.
//!
//! Settings shape, temperature classification, the weather-to-mood tables and
//! environment configuration. Nothing in this crate performs network I/O.

pub mod app_config;
pub mod category;
pub mod config;
pub mod error;
pub mod mood;
pub mod settings;
pub mod thresholds;
pub mod units;

pub use app_config::AppConfig;
pub use category::NewsCategory;
pub use config::{load_app_config, load_app_config_from_env, load_settings};
pub use error::{ConfigError, ParseCategoryError, ParseUnitError, ThresholdError};
pub use mood::{broad_query_for, keywords_for, mood_for, MoodKeywords, NewsFilterType};
pub use settings::{Coordinates, Settings};
pub use thresholds::{classify, validate, TemperatureThresholds, ThresholdDisplay, WeatherCondition};
pub use units::{convert_temperature, format_temperature, TemperatureUnit};
