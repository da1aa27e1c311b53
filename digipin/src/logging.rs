//! Logging infrastructure for the DIGIPIN tools.
//!
//! - Always writes to stderr, so stdout stays clean for results
//! - Optionally mirrors to a log file (truncated at startup)
//! - Level from `RUST_LOG`, falling back to the configured level

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - Filter directive used when `RUST_LOG` is not set (e.g. "warn")
/// * `log_file` - Optional file to mirror log output into
///
/// # Errors
///
/// Returns error if the log file's directory cannot be created or the file
/// cannot be cleared.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<LoggingGuard, io::Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match log_file {
        Some(path) => {
            let (dir, name) = prepare_log_file(path)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Splits a log path into the appender's directory and file name.
///
/// A bare file name resolves to the current directory.
fn split_log_path(path: &Path) -> Result<(&Path, &OsStr), io::Error> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path '{}' has no file name", path.display()),
        )
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, name))
}

/// Creates the parent directory and truncates the file.
fn prepare_log_file(path: &Path) -> Result<(&Path, &OsStr), io::Error> {
    let (dir, name) = split_log_path(path)?;
    fs::create_dir_all(dir)?;
    fs::write(path, "")?;
    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_directory_and_clears_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("digipin.log");

        let (dir, name) = prepare_log_file(&path).unwrap();
        assert_eq!(dir, temp_dir.path().join("logs"));
        assert_eq!(name, "digipin.log");
        assert!(path.exists());

        fs::write(&path, "old log data").unwrap();
        prepare_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_split_rejects_path_without_file_name() {
        let err = split_log_path(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let (dir, name) = split_log_path(Path::new("digipin.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "digipin.log");
    }
}
