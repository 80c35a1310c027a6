//! HTTP client for the OpenWeather 2.5 REST API.

use std::time::Duration;

use async_trait::async_trait;
use moodwire_core::{Coordinates, TemperatureUnit};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::WeatherError;
use crate::provider::WeatherProvider;
use crate::types::{ForecastData, WeatherData};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";

/// Client for OpenWeather's `weather` and `forecast` endpoints.
///
/// OpenWeather only accepts the key as the `appid` query parameter, so
/// request URLs are never logged in full.
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OpenWeatherClient {
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`WeatherError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| WeatherError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Current conditions at `coords`, with temperatures in `unit`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::UnexpectedStatus`] on any non-2xx status.
    /// - [`WeatherError::Http`] on network failure or timeout.
    /// - [`WeatherError::Deserialize`] if the body lacks `main.temp` or is not JSON.
    pub async fn get_current_weather(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<WeatherData, WeatherError> {
        self.get_json("weather", coords, unit).await
    }

    /// 5-day / 3-hour forecast at `coords`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_current_weather`].
    pub async fn get_forecast(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<ForecastData, WeatherError> {
        self.get_json("forecast", coords, unit).await
    }

    fn build_url(
        &self,
        endpoint: &str,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<Url, WeatherError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| WeatherError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("lat", &coords.latitude.to_string())
            .append_pair("lon", &coords.longitude.to_string())
            .append_pair("appid", &self.api_key)
            .append_pair("units", unit.openweather_units());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<T, WeatherError> {
        let url = self.build_url(endpoint, coords, unit)?;
        tracing::debug!(
            endpoint,
            lat = coords.latitude,
            lon = coords.longitude,
            units = unit.openweather_units(),
            "requesting openweather"
        );

        // The request URL carries `appid`, so it is stripped from transport errors.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| WeatherError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<WeatherData, WeatherError> {
        self.get_current_weather(coords, unit).await
    }

    async fn forecast(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<ForecastData, WeatherError> {
        self.get_forecast(coords, unit).await
    }
}
