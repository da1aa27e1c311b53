//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use digipin::config::{ConfigFile, OutputFormat};
use digipin::{Code, Coordinate};

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum FormatArg {
    /// Plain text, one result per line
    Text,
    /// One JSON object per result
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Resolved output preferences for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub grouped: bool,
}

impl OutputOptions {
    /// CLI flags take precedence, then config.
    pub fn resolve(format: Option<FormatArg>, compact: bool, config: &ConfigFile) -> Self {
        Self {
            format: format.map(Into::into).unwrap_or(config.output.format),
            grouped: !compact && config.output.grouped,
        }
    }

    pub fn render_code(&self, code: &Code) -> String {
        if self.grouped {
            code.to_string()
        } else {
            code.compact()
        }
    }
}

/// JSON shape shared by encode and decode results.
#[derive(Debug, Serialize)]
pub struct CodeRecord {
    pub digipin: String,
    pub lat: f64,
    pub lon: f64,
}

/// Formats one result line.
///
/// `coord` is the input coordinate for encode results and the decoded
/// centroid for decode results.
pub fn format_result(
    options: &OutputOptions,
    code: &Code,
    coord: Coordinate,
    primary: Primary,
) -> Result<String, serde_json::Error> {
    match options.format {
        OutputFormat::Json => serde_json::to_string(&CodeRecord {
            digipin: options.render_code(code),
            lat: coord.lat,
            lon: coord.lon,
        }),
        OutputFormat::Text => Ok(match primary {
            Primary::Code => options.render_code(code),
            Primary::Coordinate => coord.to_string(),
        }),
    }
}

/// Which half of a result the text format prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    Code,
    Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat, grouped: bool) -> OutputOptions {
        OutputOptions { format, grouped }
    }

    #[test]
    fn test_resolve_prefers_cli_flags() {
        let mut config = ConfigFile::default();
        config.output.format = OutputFormat::Json;

        let resolved = OutputOptions::resolve(Some(FormatArg::Text), false, &config);
        assert_eq!(resolved.format, OutputFormat::Text);
        assert!(resolved.grouped);

        let resolved = OutputOptions::resolve(None, true, &config);
        assert_eq!(resolved.format, OutputFormat::Json);
        assert!(!resolved.grouped);
    }

    #[test]
    fn test_resolve_respects_config_grouping() {
        let mut config = ConfigFile::default();
        config.output.grouped = false;
        assert!(!OutputOptions::resolve(None, false, &config).grouped);
    }

    #[test]
    fn test_text_results() {
        let code: Code = "39J-49L-L8T4".parse().unwrap();
        let coord = Coordinate::new(28.622793, 77.213049);

        let grouped = options(OutputFormat::Text, true);
        assert_eq!(
            format_result(&grouped, &code, coord, Primary::Code).unwrap(),
            "39J-49L-L8T4"
        );
        assert_eq!(
            format_result(&grouped, &code, coord, Primary::Coordinate).unwrap(),
            "28.622793, 77.213049"
        );

        let compact = options(OutputFormat::Text, false);
        assert_eq!(
            format_result(&compact, &code, coord, Primary::Code).unwrap(),
            "39J49LL8T4"
        );
    }

    #[test]
    fn test_json_result() {
        let code: Code = "39J-49L-L8T4".parse().unwrap();
        let coord = Coordinate::new(28.622793, 77.213049);
        let line = format_result(
            &options(OutputFormat::Json, true),
            &code,
            coord,
            Primary::Coordinate,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["digipin"], "39J-49L-L8T4");
        assert_eq!(value["lat"], 28.622793);
        assert_eq!(value["lon"], 77.213049);
    }
}
