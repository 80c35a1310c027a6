use moodwire_weather::{LocationError, WeatherError};
use thiserror::Error;

/// Failures that abort a refresh. News failures never appear here; they
/// degrade to empty feeds instead.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("could not determine location: {0}")]
    Location(#[from] LocationError),

    #[error("could not fetch weather: {0}")]
    Weather(#[from] WeatherError),
}
