//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use digipin::config::{config_file_path, ConfigFileError};
use digipin::region::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use digipin::{CodecError, RegionTable};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to read or write the config file
    ConfigFile(ConfigFileError),
    /// Encoding or decoding failed
    Codec(CodecError),
    /// Failed to read batch input
    Input { path: Option<PathBuf>, error: io::Error },
    /// Failed to write results
    Output(io::Error),
    /// Failed to serialize a JSON result
    Json(serde_json::Error),
    /// Some batch records could not be processed
    Batch { failed: usize, total: usize },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Codec(CodecError::OutOfDomain { .. }) => {
                eprintln!();
                eprintln!(
                    "DIGIPIN covers latitude {} to {} and longitude {} to {}.",
                    MIN_LAT, MAX_LAT, MIN_LON, MAX_LON
                );
            }
            CliError::Codec(CodecError::InvalidSymbol { .. })
            | CliError::Codec(CodecError::InvalidLength(_)) => {
                let alphabet: String = RegionTable::standard().grid().alphabet().iter().collect();
                eprintln!();
                eprintln!("A DIGIPIN has 10 symbols from: {}", alphabet);
                eprintln!("Separators are optional, e.g. 39J-49L-L8T4 or 39J49LL8T4.");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!(
                    "Correct the value in {} or delete the file to restore defaults.",
                    config_file_path().display()
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Codec(e) => write!(f, "{}", e),
            CliError::Input { path, error } => match path {
                Some(path) => write!(f, "Failed to read '{}': {}", path.display(), error),
                None => write!(f, "Failed to read standard input: {}", error),
            },
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
            CliError::Json(e) => write!(f, "Failed to format JSON: {}", e),
            CliError::Batch { failed, total } => {
                write!(f, "{} of {} records failed", failed, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Codec(e) => Some(e),
            CliError::Input { error, .. } => Some(error),
            CliError::Output(e) => Some(e),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for CliError {
    fn from(e: CodecError) -> Self {
        CliError::Codec(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_display() {
        let err = CliError::Batch {
            failed: 2,
            total: 10,
        };
        assert_eq!(err.to_string(), "2 of 10 records failed");
    }

    #[test]
    fn test_codec_error_passes_through() {
        let err: CliError = CodecError::InvalidLength(4).into();
        assert_eq!(
            err.to_string(),
            "Invalid code length: expected 10 symbols, found 4"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_stdin_input_error_display() {
        let err = CliError::Input {
            path: None,
            error: io::Error::new(io::ErrorKind::UnexpectedEof, "eof"),
        };
        assert!(err.to_string().contains("standard input"));
    }
}
