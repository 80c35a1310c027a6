//! Weather and location sources for the refresh cycle.
//!
//! [`OpenWeatherClient`] fetches current conditions and the 5-day forecast.
//! [`FixedLocation`] and [`IpApiLocator`] answer "where is the user".

pub mod client;
pub mod error;
pub mod location;
pub mod provider;
pub mod types;

pub use client::OpenWeatherClient;
pub use error::{LocationError, WeatherError};
pub use location::{FixedLocation, IpApiLocator};
pub use provider::{LocationProvider, WeatherProvider};
pub use types::{
    City, Clouds, ForecastData, ForecastEntry, MainReadings, WeatherData, WeatherDescription,
    Wind,
};
