//! `digipin config` commands for viewing and editing `~/.digipin/config.ini`.

use std::path::Path;

use clap::Subcommand;
use tracing::warn;

use digipin::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Setting name as section.key (e.g. output.format)
        key: String,
    },

    /// Change one setting, keeping the others
    Set {
        /// Setting name as section.key (e.g. output.format)
        key: String,

        /// New value (empty clears logging.file)
        value: String,
    },

    /// Print every setting grouped by section
    List,

    /// Print the config file location
    Path,
}

/// Run a config subcommand against the default config file.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();

    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            let value = key.get(&load_or_default(&path));
            println!("{}", display_value(&value));
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let config = set_value(&path, key, &value)?;
            println!("Set {} = {}", key.name(), display_value(&key.get(&config)));
        }
        ConfigCommands::List => {
            for line in listing(&load_or_default(&path)) {
                println!("{}", line);
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }

    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Run 'digipin config list' for the available keys.",
            key
        ))
    })
}

/// Loads the file for read-only display, showing defaults if it is unreadable.
fn load_or_default(path: &Path) -> ConfigFile {
    ConfigFile::load_from(path).unwrap_or_else(|e| {
        warn!(error = %e, path = %path.display(), "Showing defaults for unreadable config");
        eprintln!("Warning: {}; showing defaults", e);
        ConfigFile::default()
    })
}

/// Updates one key in the file at `path`.
///
/// Fails without writing if the existing file cannot be loaded, so a bad
/// value elsewhere never resets the other settings.
fn set_value(path: &Path, key: ConfigKey, value: &str) -> Result<ConfigFile, CliError> {
    let mut config = ConfigFile::load_from(path)?;
    key.set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save_to(path)?;
    Ok(config)
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Renders every key under its `[section]` header.
fn listing(config: &ConfigFile) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section = "";

    for key in ConfigKey::all() {
        if key.section() != section {
            if !section.is_empty() {
                lines.push(String::new());
            }
            section = key.section();
            lines.push(format!("[{}]", section));
        }
        lines.push(format!(
            "  {} = {}",
            key.key_name(),
            display_value(&key.get(config))
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use digipin::config::OutputFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.ini");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_set_keeps_other_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "[output]\nformat = json\ngrouped = false\n\n[logging]\nlevel = warn\nfile = /var/log/digipin.log\n",
        );

        set_value(&path, ConfigKey::LoggingLevel, "info").unwrap();

        let reloaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(reloaded.output.format, OutputFormat::Json);
        assert!(!reloaded.output.grouped);
        assert_eq!(reloaded.logging.level, "info");
        assert_eq!(
            reloaded.logging.file,
            Some(PathBuf::from("/var/log/digipin.log"))
        );
    }

    #[test]
    fn test_set_refuses_to_overwrite_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let content =
            "[output]\nformat = json\ngrouped = false\n\n[logging]\nlevel = loud\nfile = /var/log/x.log\n";
        let path = write_config(&temp_dir, content);

        let err = set_value(&path, ConfigKey::LoggingLevel, "info").unwrap_err();

        assert!(matches!(err, CliError::ConfigFile(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_set_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.ini");

        let config = set_value(&path, ConfigKey::OutputFormat, "json").unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(ConfigFile::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_set_rejects_invalid_value_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");

        let err = set_value(&path, ConfigKey::OutputGrouped, "maybe").unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_unreadable_file_displays_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nformat = yaml\n");
        assert_eq!(load_or_default(&path), ConfigFile::default());
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(parse_key("output.colour"), Err(CliError::Config(_))));
        assert_eq!(parse_key("Output.Format").unwrap(), ConfigKey::OutputFormat);
    }

    #[test]
    fn test_listing_groups_by_section() {
        let lines = listing(&ConfigFile::default());
        assert_eq!(
            lines,
            vec![
                "[output]",
                "  format = text",
                "  grouped = true",
                "",
                "[logging]",
                "  level = warn",
                "  file = (not set)",
            ]
        );
    }
}
