use std::sync::Arc;

use crate::{domain::seed::SeedData, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub seed: Arc<SeedData>,
}

impl AppContext {
    pub fn new(config: AppConfig, seed: SeedData) -> Self {
        Self {
            config,
            seed: Arc::new(seed),
        }
    }
}
