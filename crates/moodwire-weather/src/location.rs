//! Location sources.

use std::time::Duration;

use async_trait::async_trait;
use moodwire_core::Coordinates;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LocationError;
use crate::provider::LocationProvider;

const IP_API_URL: &str = "http://ip-api.com/json";

/// A location known up front: from settings, config, or CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
}

/// Coarse geolocation from the caller's public IP via ip-api.com.
pub struct IpApiLocator {
    client: Client,
    url: String,
}

impl IpApiLocator {
    /// # Errors
    ///
    /// Returns [`LocationError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LocationError> {
        Self::with_url(timeout_secs, user_agent, IP_API_URL)
    }

    /// # Errors
    ///
    /// Returns [`LocationError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_url(timeout_secs: u64, user_agent: &str, url: &str) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }
}

#[async_trait]
impl LocationProvider for IpApiLocator {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!(
                "ip-api returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: IpApiResponse = response.json().await?;
        if body.status != "success" {
            return Err(LocationError::Unavailable(
                body.message.unwrap_or_else(|| format!("status {}", body.status)),
            ));
        }

        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => {
                tracing::debug!(
                    city = body.city.as_deref().unwrap_or("unknown"),
                    latitude,
                    longitude,
                    "located via ip-api"
                );
                Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(LocationError::Unavailable(
                "ip-api response missing coordinates".to_owned(),
            )),
        }
    }
}
