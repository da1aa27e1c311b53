//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::defaults::{DEFAULT_GROUPED, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FORMAT};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one value per line
    Text,
    /// One JSON object per result
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Result format
    pub format: OutputFormat,
    /// Insert separators after symbols 3 and 6
    pub grouped: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_OUTPUT_FORMAT,
            grouped: DEFAULT_GROUPED,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Level filter used when `RUST_LOG` is unset
    pub level: String,
    /// Optional log file; stderr only when `None`
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}
