use std::path::PathBuf;

use thiserror::Error;

use crate::domain::seed::SeedError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file at {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid seed data from {origin}: {source}")]
    SeedInvalid {
        origin: String,
        #[source]
        source: SeedError,
    },
    #[error("failed to render seed data: {0}")]
    SeedRender(#[source] toml::ser::Error),
    #[error("unable to resolve storage path: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create directory at {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
