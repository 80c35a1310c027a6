use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseUnitError;

/// Display and request unit for temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// `units` query value understood by OpenWeatherMap.
    #[must_use]
    pub fn openweather_units(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "metric",
            TemperatureUnit::Fahrenheit => "imperial",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "celsius" | "c" | "metric" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "imperial" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Convert `temp` between units. Identity when `from == to`.
#[must_use]
pub fn convert_temperature(temp: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => temp * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (temp - 32.0) * 5.0 / 9.0,
        _ => temp,
    }
}

/// Render a temperature rounded to the nearest degree, e.g. `"25°C"`.
#[must_use]
pub fn format_temperature(temp: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", temp.round(), unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_to_celsius_body_temperature() {
        let c = convert_temperature(98.6, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert!((c - 37.0).abs() < 1e-9, "got {c}");
    }

    #[test]
    fn celsius_to_fahrenheit_freezing_point() {
        let f = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((f - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_unit_is_identity() {
        assert!(
            (convert_temperature(12.34, TemperatureUnit::Celsius, TemperatureUnit::Celsius)
                - 12.34)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn format_rounds_and_appends_symbol() {
        assert_eq!(format_temperature(24.6, TemperatureUnit::Celsius), "25°C");
        assert_eq!(format_temperature(71.2, TemperatureUnit::Fahrenheit), "71°F");
        assert_eq!(format_temperature(-3.4, TemperatureUnit::Celsius), "-3°C");
    }

    #[test]
    fn parses_unit_names_case_insensitively() {
        assert_eq!("Celsius".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("imperial".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn openweather_units_mapping() {
        assert_eq!(TemperatureUnit::Celsius.openweather_units(), "metric");
        assert_eq!(TemperatureUnit::Fahrenheit.openweather_units(), "imperial");
    }
}
