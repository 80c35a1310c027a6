//! `classify` and `thresholds` command handlers.

use anyhow::Context;
use clap::Subcommand;
use moodwire_core::{
    classify, format_temperature, mood_for, validate, Settings, TemperatureThresholds,
    TemperatureUnit, ThresholdDisplay,
};

/// Sub-commands available under `thresholds`.
#[derive(Debug, Subcommand)]
pub enum ThresholdCommands {
    /// Check a cold/hot pair (°C) without saving it
    Validate {
        #[arg(allow_hyphen_values = true)]
        cold: f64,
        #[arg(allow_hyphen_values = true)]
        hot: f64,
    },
    /// Show the default bands in a display unit
    Show {
        #[arg(long, default_value = "celsius")]
        unit: TemperatureUnit,
    },
}

/// # Errors
///
/// Returns an error when `validate` rejects the pair.
pub(crate) fn run(command: ThresholdCommands) -> anyhow::Result<()> {
    match command {
        ThresholdCommands::Validate { cold, hot } => {
            let thresholds = validate(cold, hot).context("thresholds rejected")?;
            println!("ok: {}", describe_bands(&thresholds, TemperatureUnit::Celsius));
        }
        ThresholdCommands::Show { unit } => {
            println!("{}", describe_bands(&TemperatureThresholds::default(), unit));
        }
    }
    Ok(())
}

pub(crate) fn run_classify(temperature: f64, settings: &Settings) {
    let unit = settings.temperature_unit;
    let condition = classify(temperature, unit, &settings.temperature_thresholds);
    println!(
        "{} is {condition} ({} news); bands: {}",
        format_temperature(temperature, unit),
        mood_for(condition),
        describe_bands(&settings.temperature_thresholds, unit)
    );
}

/// "cold <= 10°C < cool < 30°C <= hot", rendered in `unit`.
pub(crate) fn describe_bands(thresholds: &TemperatureThresholds, unit: TemperatureUnit) -> String {
    let display = ThresholdDisplay::for_unit(thresholds, unit);
    format!("cold <= {} < cool < {} <= hot", display.cold, display.hot)
}
