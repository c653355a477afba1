use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, SeedConfig, SessionConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub seed: Option<FileSeedConfig>,
    pub session: Option<FileSessionConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(seed) = self.seed {
            seed.merge_into(&mut config.seed);
        }

        if let Some(session) = self.session {
            session.merge_into(&mut config.session);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSeedConfig {
    pub path: Option<PathBuf>,
}

impl FileSeedConfig {
    fn merge_into(self, config: &mut SeedConfig) {
        if let Some(path) = self.path {
            config.path = Some(path);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSessionConfig {
    pub reset_messages_on_logout: Option<bool>,
}

impl FileSessionConfig {
    fn merge_into(self, config: &mut SessionConfig) {
        if let Some(reset) = self.reset_messages_on_logout {
            config.reset_messages_on_logout = reset;
        }
    }
}
