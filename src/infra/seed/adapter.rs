use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    domain::seed::SeedData,
    infra::{contracts::SeedAdapter, seed::load},
};

#[derive(Debug, Clone, Default)]
pub struct FileSeedAdapter {
    path: Option<PathBuf>,
}

impl FileSeedAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl SeedAdapter for FileSeedAdapter {
    fn load(&self) -> Result<SeedData> {
        Ok(load(self.path.as_deref())?)
    }
}
