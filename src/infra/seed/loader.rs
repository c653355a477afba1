use std::{fs, path::Path};

use crate::{
    domain::seed::SeedData,
    infra::{error::AppError, seed::file_seed::FileSeed},
};

const BUILTIN_ORIGIN: &str = "built-in seed";

/// Loads seed data from `path`, or the built-in sample data when `None`.
///
/// A configured path that does not exist is an error, unlike a missing
/// config file.
pub fn load(path: Option<&Path>) -> Result<SeedData, AppError> {
    let Some(path) = path else {
        tracing::debug!(origin = BUILTIN_ORIGIN, "using built-in seed data");
        return Ok(SeedData::builtin());
    };

    let raw = fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&raw, path)
}

fn parse(raw: &str, path: &Path) -> Result<SeedData, AppError> {
    let file_seed: FileSeed = toml::from_str(raw).map_err(|source| AppError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;

    let seed = file_seed.into_seed().map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "seed validation failed");
        AppError::SeedInvalid {
            origin: path.display().to_string(),
            source,
        }
    })?;

    tracing::info!(
        path = %path.display(),
        contacts = seed.contacts().len(),
        messages = seed.messages().len(),
        "seed data loaded"
    );
    Ok(seed)
}

/// Renders seed data in the seed file format.
pub fn render(seed: &SeedData) -> Result<String, AppError> {
    toml::to_string(&FileSeed::from_seed(seed)).map_err(AppError::SeedRender)
}
