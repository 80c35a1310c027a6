use async_trait::async_trait;
use moodwire_core::{Coordinates, TemperatureUnit};

use crate::error::{LocationError, WeatherError};
use crate::types::{ForecastData, WeatherData};

/// Current conditions and forecast for a point.
///
/// Readings come back in `unit`, so classification must be told the same unit.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<WeatherData, WeatherError>;

    async fn forecast(
        &self,
        coords: Coordinates,
        unit: TemperatureUnit,
    ) -> Result<ForecastData, WeatherError>;
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}
