//! Tracing setup.
//!
//! The board owns the terminal, so its events go to a log file. One-shot
//! commands log to stderr. `RUST_LOG` overrides the configured level.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// File name of the board session log.
const LOG_FILE: &str = "scriptboard.log";

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scriptboard={}", config.level)))
}

/// Log to stderr.
pub fn init_stderr(config: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log to `dir/scriptboard.log` through a non-blocking writer.
///
/// The returned guard flushes pending events when dropped; keep it alive for
/// the whole session. Returns `None`, with nothing installed, if the
/// directory cannot be created.
pub fn init_file(config: &LoggingConfig, dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: could not create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
