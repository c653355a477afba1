use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
        assert!(config.session.reset_messages_on_logout);
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[seed]
path = "custom-seed.toml"

[session]
reset_messages_on_logout = false
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
        assert_eq!(config.seed.path, Some(PathBuf::from("custom-seed.toml")));
        assert!(!config.session.reset_messages_on_logout);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[logging]\nfile = \"/tmp/msgr-test.log\"\n")
            .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/msgr-test.log")));
        assert_eq!(config.seed, crate::infra::config::SeedConfig::default());
    }

    #[test]
    fn reports_parse_error_with_path() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[session]\nreset_messages_on_logout = \"yes\"\n")
            .expect("must write test config");

        let err = load(Some(&config_path)).expect_err("config must fail to parse");

        assert!(matches!(err, AppError::ConfigParse { ref path, .. } if path == &config_path));
    }
}
