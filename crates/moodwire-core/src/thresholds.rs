//! Temperature classification against user-configurable thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;
use crate::units::{convert_temperature, format_temperature, TemperatureUnit};

pub const DEFAULT_COLD_THRESHOLD: f64 = 10.0;
pub const DEFAULT_HOT_THRESHOLD: f64 = 30.0;

const COLD_RANGE: (f64, f64) = (-50.0, 50.0);
const HOT_RANGE: (f64, f64) = (0.0, 60.0);

/// Temperature classification derived from a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Cold,
    Cool,
    Hot,
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Cold => write!(f, "cold"),
            WeatherCondition::Cool => write!(f, "cool"),
            WeatherCondition::Hot => write!(f, "hot"),
        }
    }
}

/// Cold/hot boundaries, both in Celsius.
///
/// Construct through [`validate`] to guarantee `cold < hot` and the range
/// limits. [`classify`] itself does not re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureThresholds {
    pub cold_threshold: f64,
    pub hot_threshold: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            cold_threshold: DEFAULT_COLD_THRESHOLD,
            hot_threshold: DEFAULT_HOT_THRESHOLD,
        }
    }
}

impl TemperatureThresholds {
    /// Re-run [`validate`] over the stored values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ThresholdError`] rule the pair violates.
    pub fn check(&self) -> Result<(), ThresholdError> {
        validate(self.cold_threshold, self.hot_threshold).map(|_| ())
    }
}

/// Classify `temperature` (given in `unit`) as cold, cool or hot.
///
/// Boundaries are inclusive: a Celsius value equal to the cold threshold is
/// cold, equal to the hot threshold is hot. Cold is evaluated first.
#[must_use]
pub fn classify(
    temperature: f64,
    unit: TemperatureUnit,
    thresholds: &TemperatureThresholds,
) -> WeatherCondition {
    let celsius = convert_temperature(temperature, unit, TemperatureUnit::Celsius);

    if celsius <= thresholds.cold_threshold {
        WeatherCondition::Cold
    } else if celsius >= thresholds.hot_threshold {
        WeatherCondition::Hot
    } else {
        WeatherCondition::Cool
    }
}

/// Validate a candidate threshold pair (Celsius).
///
/// Rules, first failure wins:
/// 1. `cold < hot`
/// 2. `cold` within `[-50, 50]`
/// 3. `hot` within `[0, 60]`
///
/// # Errors
///
/// Returns the [`ThresholdError`] for the first rule that fails.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate(cold: f64, hot: f64) -> Result<TemperatureThresholds, ThresholdError> {
    // Written as negated comparisons so NaN is rejected.
    if !(cold < hot) {
        return Err(ThresholdError::ColdNotBelowHot { cold, hot });
    }
    if !(COLD_RANGE.0..=COLD_RANGE.1).contains(&cold) {
        return Err(ThresholdError::ColdOutOfRange(cold));
    }
    if !(HOT_RANGE.0..=HOT_RANGE.1).contains(&hot) {
        return Err(ThresholdError::HotOutOfRange(hot));
    }

    Ok(TemperatureThresholds {
        cold_threshold: cold,
        hot_threshold: hot,
    })
}

/// Thresholds rendered in the user's display unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdDisplay {
    pub cold: String,
    pub hot: String,
}

impl ThresholdDisplay {
    #[must_use]
    pub fn for_unit(thresholds: &TemperatureThresholds, unit: TemperatureUnit) -> Self {
        let render = |celsius: f64| {
            format_temperature(
                convert_temperature(celsius, TemperatureUnit::Celsius, unit),
                unit,
            )
        };
        Self {
            cold: render(thresholds.cold_threshold),
            hot: render(thresholds.hot_threshold),
        }
    }
}
