use anyhow::Result;

use crate::{domain::seed::SeedData, infra::config::AppConfig};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

pub trait SeedAdapter {
    fn load(&self) -> Result<SeedData>;
}
