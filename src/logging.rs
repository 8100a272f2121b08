//! Logging setup
//!
//! The TUI owns the terminal, so all log output goes to a file:
//! ~/.cache/exorcism-guide/logs/guide.log

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory holding the log file
pub fn log_dir() -> Result<PathBuf> {
    Ok(dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("exorcism-guide")
        .join("logs"))
}

/// Install the global subscriber. Keep the guard alive until exit.
///
/// `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let appender = tracing_appender::rolling::never(&dir, "guide.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

/// Startup banner, logged once the guide is ready
pub fn log_startup(sections: usize, prayers: usize) {
    tracing::info!("════════════════════════════════════════════");
    tracing::info!("Bem-vindo ao Guia Completo de Exorcismo");
    tracing::info!(sections, prayers, "guide content loaded");
    tracing::info!("════════════════════════════════════════════");
}
