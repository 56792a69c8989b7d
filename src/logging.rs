//! Log file setup
//!
//! The terminal belongs to the TUI, so events go to a file through a
//! non-blocking `tracing-appender` writer. The returned guard must live until
//! exit or buffered lines are lost.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "FEEDVIEW_LOG";

/// ~/.cache/feedview/feedview.log
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("feedview").join("feedview.log"))
}

/// Filter from FEEDVIEW_LOG, falling back to `level`
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber
///
/// Returns `Ok(None)` when no log location can be determined.
pub fn init(level: &str, file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = file.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };
    let Some(file_name) = path.file_name() else {
        anyhow::bail!("log file path has no file name: {}", path.display());
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| anyhow::anyhow!("cannot open log file {}: {}", path.display(), e))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(Some(guard))
}
