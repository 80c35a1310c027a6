use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read settings file {path}: {source}")]
    SettingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file: {0}")]
    SettingsFileParse(#[from] serde_yaml::Error),

    #[error("settings validation failed: {0}")]
    Validation(String),
}

/// Reasons a candidate pair of temperature thresholds is rejected.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("cold threshold must be less than hot threshold (cold {cold}°C, hot {hot}°C)")]
    ColdNotBelowHot { cold: f64, hot: f64 },

    #[error("cold threshold must be between -50°C and 50°C (got {0}°C)")]
    ColdOutOfRange(f64),

    #[error("hot threshold must be between 0°C and 60°C (got {0}°C)")]
    HotOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown news category: {0}")]
pub struct ParseCategoryError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown temperature unit: {0} (expected celsius or fahrenheit)")]
pub struct ParseUnitError(pub String);
