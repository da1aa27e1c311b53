//! User configuration for the DIGIPIN tools.
//!
//! Settings live in `~/.digipin/config.ini`:
//!
//! ```ini
//! [output]
//! format = text
//! grouped = true
//!
//! [logging]
//! level = warn
//! file =
//! ```
//!
//! A missing file yields defaults. [`ConfigKey`] gives typed access to each
//! `section.key` for the `config get/set/list` commands.

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_GROUPED, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FORMAT, LOG_LEVELS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, LoggingSettings, OutputFormat, OutputSettings};
