use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::sync::LazyLock;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub const LOG_PREFIX: &str = "rdaylog";

/// Installs the global subscriber: a daily-rotated file under
/// `<data_dir>/logs`, mirrored to stderr when `show_std` is set.
pub fn enable_logging(data_dir: &Path, default_level: &str, show_std: bool) -> AppResult<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(data_dir.join("logs"))
        .map_err(|e| AppError::Other(format!("cannot open log file: {e}")))?;

    let stderr = std::io::stderr.with_filter(move |_| show_std);

    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace("-", "_"),
        )))
        .with_ansi(false)
        .with_writer(stderr.and(appender))
        .try_init()
        .map_err(|e| AppError::Other(format!("cannot install logger: {e}")))?;
    Ok(())
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
});
