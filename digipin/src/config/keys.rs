//! Configuration key access and validation.
//!
//! Provides a type-safe interface for getting and setting configuration
//! values by `section.key` name.

use std::str::FromStr;
use thiserror::Error;

use super::defaults::LOG_LEVELS;
use super::parser::{expand_tilde, parse_bool};
use super::settings::{ConfigFile, OutputFormat};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    OutputFormat,
    OutputGrouped,
    LoggingLevel,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "output.format" => Ok(ConfigKey::OutputFormat),
            "output.grouped" => Ok(ConfigKey::OutputGrouped),
            "logging.level" => Ok(ConfigKey::LoggingLevel),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::OutputFormat => "output.format",
            ConfigKey::OutputGrouped => "output.grouped",
            ConfigKey::LoggingLevel => "logging.level",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Section part of the name.
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or_default()
    }

    /// Key part of the name.
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or_default()
    }

    /// Current value rendered as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::OutputFormat => config.output.format.to_string(),
            ConfigKey::OutputGrouped => config.output.grouped.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value before setting. An empty value clears
    /// `logging.file`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let invalid = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::OutputFormat => {
                config.output.format = value.parse::<OutputFormat>().map_err(|_| {
                    invalid(format!("'{}' is not one of: text, json", value))
                })?;
            }
            ConfigKey::OutputGrouped => {
                config.output.grouped = parse_bool(value)
                    .ok_or_else(|| invalid(format!("'{}' is not a boolean", value)))?;
            }
            ConfigKey::LoggingLevel => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(invalid(format!(
                        "'{}' is not one of: {}",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                config.logging.level = level;
            }
            ConfigKey::LoggingFile => {
                let value = value.trim();
                config.logging.file = (!value.is_empty()).then(|| expand_tilde(value));
            }
        }
        Ok(())
    }

    /// All keys in display order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::OutputFormat,
            ConfigKey::OutputGrouped,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }
}
