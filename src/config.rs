//! Decoder configuration, loaded from the environment or built in code.

use std::str::FromStr;

use crate::consts::UNKNOWN_TYPES_VAR;

/// A custom error type for configuration loading failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// What the decoder does with an event type nobody registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Drop the event, so peers speaking a newer protocol keep working.
    #[default]
    Skip,
    /// Report it to the caller as an error.
    Error,
}

impl FromStr for UnknownTypePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(UnknownTypePolicy::Skip),
            "error" => Ok(UnknownTypePolicy::Error),
            _ => Err(format!("'{}' is not one of skip, error", s)),
        }
    }
}

/// Holds all configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    unknown_types: UnknownTypePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            unknown_types: UnknownTypePolicy::Skip,
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the current directory is loaded first when present.
    ///
    /// *   `WYOMING_UNKNOWN_TYPES`: (Optional) "skip" or "error". Defaults to "skip".
    ///
    /// Log filtering is left to the subscriber the application installs,
    /// which conventionally reads `RUST_LOG` itself.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let unknown_types = match lookup(UNKNOWN_TYPES_VAR) {
            Some(value) => value
                .parse::<UnknownTypePolicy>()
                .map_err(|e| ConfigError::InvalidValue(UNKNOWN_TYPES_VAR.to_string(), e))?,
            None => UnknownTypePolicy::default(),
        };

        Ok(Self { unknown_types })
    }

    pub fn unknown_types(&self) -> UnknownTypePolicy {
        self.unknown_types
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.config.unknown_types = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
