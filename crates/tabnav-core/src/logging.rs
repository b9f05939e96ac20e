//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "TABNAV_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/tabnav/logs/` so that stdout stays
/// reserved for NDJSON output. Log level is controlled by `TABNAV_LOG`.
///
/// # Examples
/// ```bash
/// TABNAV_LOG=debug tabnav session.toml
/// TABNAV_LOG=tabnav_app=trace tabnav session.toml
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "tabnav.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("tabnav=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("tabnav starting, log directory: {}", log_dir.display());

    Ok(())
}

/// `tabnav/logs` under the platform's local data dir, or the working dir
/// when the platform has none
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_default()
        .join("tabnav")
        .join("logs")
}
