//! `refresh` command handler.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use moodwire_core::{AppConfig, Settings};
use moodwire_feed::RefreshService;
use moodwire_newsapi::{NewsApiClient, NewsProvider, NewsQueryClient};
use moodwire_weather::{FixedLocation, IpApiLocator, LocationProvider, OpenWeatherClient};

use crate::render::print_outcome;

/// Builds the news boundary shared by `refresh` and `news`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_news_client(config: &AppConfig) -> anyhow::Result<NewsQueryClient> {
    let api = NewsApiClient::with_base_url(
        &config.news_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.news_base_url,
    )
    .context("failed to build NewsAPI client")?;
    let provider: Arc<dyn NewsProvider> = Arc::new(api);
    Ok(NewsQueryClient::new(provider, config.news_country.clone())
        .with_timeout(Duration::from_secs(config.request_timeout_secs)))
}

fn build_location(
    config: &AppConfig,
    settings: &Settings,
) -> anyhow::Result<Arc<dyn LocationProvider>> {
    if let Some(coords) = settings.location {
        return Ok(Arc::new(FixedLocation(coords)));
    }
    let locator = IpApiLocator::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build ip-api locator")?;
    Ok(Arc::new(locator))
}

/// Runs one refresh cycle and prints the result.
///
/// # Errors
///
/// Returns an error if a client cannot be built or the location or weather
/// lookup fails. News failures are reported inside the output instead.
pub(crate) async fn run_refresh(
    config: &AppConfig,
    settings: &Settings,
    json: bool,
) -> anyhow::Result<()> {
    let weather = OpenWeatherClient::with_base_url(
        &config.openweather_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.weather_base_url,
    )
    .context("failed to build OpenWeather client")?;

    let service = RefreshService::new(
        build_location(config, settings)?,
        Arc::new(weather),
        build_news_client(config)?,
        Duration::from_millis(config.news_inter_request_delay_ms),
    );

    let outcome = service.refresh(settings).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, settings.temperature_unit);
    }
    Ok(())
}
