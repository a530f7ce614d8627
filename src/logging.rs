//! Tracing setup for the `bookql` binary.
//!
//! Stdout carries GraphQL envelopes and listings, so log output never goes
//! there: events are written to stderr, plus an optional JSON file.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;
use crate::error::Result;

const DEFAULT_LOG_FILE_NAME: &str = "bookql.log";

/// `RUST_LOG` wins; otherwise only this crate's events, at debug when verbose.
fn catalog_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("bookql={level}")))
}

/// Daily-rotated appender for `path`, creating its directory first.
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.into());
    Ok(rolling::daily(directory, file_name))
}

/// Install the global subscriber described by `settings`.
///
/// Fails when the log file's directory cannot be created. If a subscriber is
/// already installed (tests, embedding) the existing one is kept.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let file_layer = match &settings.file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(log_file_appender(path)?)
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(catalog_filter(settings.verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    tracing::debug!(
        installed,
        verbose = settings.verbose,
        log_file = ?settings.file,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_repeatable() {
        init(&LoggingSettings::default()).unwrap();
        init(&LoggingSettings {
            verbose: true,
            file: None,
        })
        .unwrap();
    }

    #[test]
    fn test_init_with_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("bookql.log");

        init(&LoggingSettings {
            verbose: true,
            file: Some(log_path.clone()),
        })
        .unwrap();

        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_unusable_log_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let settings = LoggingSettings {
            verbose: false,
            file: Some(blocker.join("bookql.log")),
        };
        assert!(init(&settings).is_err());
    }
}
