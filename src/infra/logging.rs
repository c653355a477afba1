use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Installs the global subscriber writing to the log file.
///
/// The TUI owns stdout, so logs always go to a file. The returned guard
/// flushes the background writer on drop and must outlive the shell.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            layout.log_file()
        }
    };
    let (dir, file_name) = split_log_path(&path)?;

    fs::create_dir_all(&dir).map_err(|source| AppError::StorageDirCreate {
        path: dir.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|error| AppError::LoggingInit(error.into()))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, OsString), AppError> {
    let file_name = path
        .file_name()
        .map(ToOwned::to_owned)
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log path {} has no file name", path.display()),
        })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name))
}
