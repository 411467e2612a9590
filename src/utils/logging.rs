//! Logging configuration using tracing

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::utils::config_store::get_or_create_log_dir;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "NEURODEX_LOG";

const DEFAULT_FILTER: &str = "neurodex=info,warn";

/// Initialize the logging subsystem
///
/// Logs go to stderr and to a daily-rolling `neurodex.log` in the local data
/// directory. The level is controlled by `NEURODEX_LOG`:
///
/// ```bash
/// NEURODEX_LOG=debug neurodex
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let log_dir = get_or_create_log_dir();
    let file_layer = log_dir.as_ref().ok().map(|dir| {
        fmt::layer()
            .with_writer(RollingFileAppender::new(Rotation::DAILY, dir, "neurodex.log"))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_timer(fmt::time::LocalTime::rfc_3339())
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    match log_dir {
        Ok(dir) => tracing::info!(log_dir = %dir.display(), "Logging initialized"),
        Err(e) => tracing::warn!(error = %e, "Log directory unavailable, logging to stderr only"),
    }
}
