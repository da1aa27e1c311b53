//! INI parsing logic for converting `Ini` → `ConfigFile`.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::LOG_LEVELS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("format") {
            config.output.format = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "output".to_string(),
                key: "format".to_string(),
                value: v.to_string(),
                reason: "must be one of: text, json".to_string(),
            })?;
        }
        if let Some(v) = section.get("grouped") {
            config.output.grouped = parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                section: "output".to_string(),
                key: "grouped".to_string(),
                value: v.to_string(),
                reason: "must be true or false".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            let v = v.trim().to_lowercase();
            if !LOG_LEVELS.contains(&v.as_str()) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "level".to_string(),
                    value: v,
                    reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
                });
            }
            config.logging.level = v;
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[output]
format = JSON
grouped = no

[logging]
level = Debug
file = /tmp/digipin.log
"#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.grouped);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/digipin.log")));
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[logging]
level = info
"#,
        )
        .unwrap();

        assert_eq!(config.output, ConfigFile::default().output);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_empty_log_file_means_none() {
        let config = load("[logging]\nfile =\n").unwrap();
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_invalid_output_format() {
        let result = load("[output]\nformat = xml\n");
        match result {
            Err(ConfigFileError::InvalidValue { section, key, .. }) => {
                assert_eq!(section, "output");
                assert_eq!(key, "format");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_grouped() {
        let result = load("[output]\ngrouped = maybe\n");
        assert!(matches!(result, Err(ConfigFileError::InvalidValue { .. })));
    }

    #[test]
    fn test_invalid_log_level() {
        let result = load("[logging]\nlevel = loud\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_parse_bool_values() {
        for v in ["true", "TRUE", "1", "yes", " on "] {
            assert_eq!(parse_bool(v), Some(true), "{:?}", v);
        }
        for v in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(v), Some(false), "{:?}", v);
        }
        assert_eq!(parse_bool("sure"), None);
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs/d.log"), home.join("logs/d.log"));
        }
        assert_eq!(expand_tilde("/var/log/d.log"), PathBuf::from("/var/log/d.log"));
    }
}
