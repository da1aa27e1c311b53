//! Default values for every configuration setting.

use super::settings::OutputFormat;

/// Default output format for CLI results.
pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Text;

/// Render codes as `XXX-XXX-XXXX` by default.
pub const DEFAULT_GROUPED: bool = true;

/// Default log level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
