//! Logging initialisation for the binaries.
//!
//! The terminal belongs to the maze while the app runs, so log lines go to a file through a
//! non-blocking writer. The level is controlled via `RUST_LOG`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "mazeweave";
const LOG_FILE_SUFFIX: &str = "log";

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("cannot create log directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The log file could not be opened.
    #[error("cannot open log file: {source}")]
    Appender {
        #[source]
        source: InitError,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Path of the log file written by [`init`] for a given directory.
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join(format!("{LOG_FILE_PREFIX}.{LOG_FILE_SUFFIX}"))
}

/// Install a global subscriber that appends to `mazeweave.log` in `dir`.
///
/// Keep the returned guard alive for as long as events should be written; dropping it flushes
/// the background writer.
///
/// # Errors
/// Returns [`LoggingError`] if the directory or file cannot be created, or a global subscriber
/// is already installed.
pub fn init(dir: &Path) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .map_err(|source| LoggingError::Appender { source })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })?;

    tracing::info!("[logging] writing to {}", log_file(dir).display());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        assert_eq!(log_file(Path::new("logs")), PathBuf::from("logs/mazeweave.log"));
    }

    #[test]
    fn test_unusable_directory() {
        let file = tempfile::NamedTempFile::new().expect("temp file must be created");
        let dir = file.path().join("nested");
        match init(&dir) {
            Err(LoggingError::CreateDir { path, .. }) => assert_eq!(path, dir),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_init_writes_to_file() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let guard = init(dir.path()).expect("logging must initialise");
        tracing::warn!("log file smoke test");
        drop(guard);

        let contents = std::fs::read_to_string(log_file(dir.path())).expect("log file must exist");
        assert!(contents.contains("log file smoke test"));
        assert!(matches!(
            init(dir.path()),
            Err(LoggingError::InstallFailed { .. })
        ));
    }
}
