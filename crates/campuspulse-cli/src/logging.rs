// Rust guideline compliant 2026-10-16

//! Tracing setup for the `cpulse` binary.

use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Lifecycle events such as submissions and status changes.
    Info,
    /// Storage loads and other internals.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Installs a JSON tracing subscriber.
///
/// Logs go to stderr, or are appended to `log_file` through a non-blocking
/// writer when one is given. Stdout stays reserved for command output.
///
/// # Arguments
///
/// * `level` - Maximum level to record
/// * `log_file` - Optional file to append logs to
///
/// # Returns
///
/// The writer guard when logging to a file; it must be held until exit so
/// buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(level: LogLevel, log_file: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let level = Level::from(level);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
