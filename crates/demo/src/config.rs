//! Demo configuration, read from the environment.

use std::str::FromStr;

use thiserror::Error;

/// Output format environment variable
pub const FORMAT_VAR: &str = "LABKIT_DEMO_FORMAT";

/// Brand of the demo auto
pub const AUTO_BRAND_VAR: &str = "LABKIT_DEMO_AUTO_BRAND";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How the walkthrough is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per step, using each entity's `Display`
    #[default]
    Text,
    /// A JSON array of steps with the serialized entity state
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: FORMAT_VAR,
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub format: OutputFormat,
    pub auto_brand: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            auto_brand: "audi".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset or blank variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format = match read(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };
        let auto_brand = read(AUTO_BRAND_VAR).unwrap_or(defaults.auto_brand);

        Ok(Self { format, auto_brand })
    }
}
