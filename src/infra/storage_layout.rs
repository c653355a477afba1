use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "msgr";
const LOG_FILE_NAME: &str = "msgr.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let base = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve state directory (XDG_STATE_HOME/HOME)".into(),
            })?;

        Ok(Self::under(&base))
    }

    pub fn under(base: &Path) -> Self {
        let state_dir = base.join(APP_DIR_NAME);
        let log_dir = state_dir.join("logs");

        Self { state_dir, log_dir }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.state_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
