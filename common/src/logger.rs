//! `tracing` setup for the gradebook binary.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory the daily-rolling log files are written to.
pub const LOG_DIR: &str = "logs";

/// Installs the global subscriber: a daily-rolling file layer under
/// [`LOG_DIR`] and, when `log_to_stdout` is set, an ANSI console layer.
/// Filtering follows `LOG_LEVEL`, falling back to `default_filter`.
///
/// The console layer writes to stderr; stdout carries the report JSON.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging(log_file: &str, default_filter: &str, log_to_stdout: bool) -> WorkerGuard {
    fs::create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let console_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .ok();

    guard
}
