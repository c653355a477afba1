use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};

use crate::{
    domain::{clock::Clock, seed::SeedData},
    infra::{
        config::AppConfig,
        contracts::{ConfigAdapter, SeedAdapter},
    },
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubSeedAdapter;

impl SeedAdapter for StubSeedAdapter {
    fn load(&self) -> Result<SeedData> {
        Ok(SeedData::builtin())
    }
}

/// Clock frozen at a given local time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        let now = Local
            .with_ymd_and_hms(2026, 2, 14, hour, minute, 0)
            .earliest()
            .expect("fixture time should exist in local timezone");
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let config = StubConfigAdapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn fixed_clock_reports_requested_time() {
        let clock = FixedClock::at(7, 30);

        assert_eq!(clock.now().format("%H:%M").to_string(), "07:30");
    }
}
