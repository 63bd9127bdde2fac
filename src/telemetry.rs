use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "app.log";

/// Initializes the diagnostic log: an append-only file in `log_dir`,
/// written through a non-blocking worker. The returned guard must be held
/// for the life of the process so buffered lines are flushed on exit.
pub fn init_telemetry(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!(log_dir = %log_dir.display(), "Telemetry initialized");

    Ok(guard)
}
