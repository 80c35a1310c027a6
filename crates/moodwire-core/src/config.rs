use std::path::{Path, PathBuf};

use crate::app_config::AppConfig;
use crate::settings::Settings;
use crate::ConfigError;

pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let news_api_key = require("NEWS_API_KEY")?;
    let openweather_api_key = require("OPENWEATHER_API_KEY")?;

    let news_base_url = or_default("MOODWIRE_NEWS_BASE_URL", DEFAULT_NEWS_BASE_URL);
    let weather_base_url = or_default("MOODWIRE_WEATHER_BASE_URL", DEFAULT_WEATHER_BASE_URL);
    let news_country = or_default("MOODWIRE_NEWS_COUNTRY", "in").to_lowercase();
    if news_country.len() != 2 || !news_country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOODWIRE_NEWS_COUNTRY".to_string(),
            reason: format!("expected a two-letter country code, got '{news_country}'"),
        });
    }

    let request_timeout_secs = parse_u64("MOODWIRE_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOODWIRE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let news_inter_request_delay_ms = parse_u64("MOODWIRE_NEWS_INTER_REQUEST_DELAY_MS", "500")?;

    let log_level = or_default("MOODWIRE_LOG_LEVEL", "info");
    let settings_path = lookup("MOODWIRE_SETTINGS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let user_agent = or_default("MOODWIRE_USER_AGENT", "moodwire/0.1 (weather-news)");

    Ok(AppConfig {
        news_api_key,
        openweather_api_key,
        news_base_url,
        weather_base_url,
        news_country,
        request_timeout_secs,
        news_inter_request_delay_ms,
        log_level,
        settings_path,
        user_agent,
    })
}

/// Load user settings from a YAML file.
///
/// Missing fields fall back to [`Settings::default`]. Repeated categories are
/// collapsed, and the thresholds are validated with the same rules as an
/// interactive save.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or its thresholds
/// fail validation.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SettingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut settings: Settings = serde_yaml::from_str(&content)?;
    let categories = std::mem::take(&mut settings.selected_news_categories);
    settings.set_categories(categories);

    settings
        .temperature_thresholds
        .check()
        .map_err(|e| ConfigError::Validation(e.to_string()))?;

    Ok(settings)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
