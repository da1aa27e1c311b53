//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!(
        r#"[output]
; Result format for encode/decode/batch:
;   text - plain text, one result per line
;   json - one JSON object per result
format = {}
; Render codes as XXX-XXX-XXXX (true) or as 10 bare symbols (false)
grouped = {}

[logging]
; Log level when RUST_LOG is not set: error, warn, info, debug, trace
level = {}
; Optional log file (leave empty to log to stderr only)
file = {}
"#,
        config.output.format, config.output.grouped, config.logging.level, log_file
    )
}
