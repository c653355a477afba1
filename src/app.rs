use std::path::Path;

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Seed => {
            print!("{}", seed_report(cli.config.as_deref())?);
        }
    }

    Ok(())
}

/// Effective seed data (built-in or from the configured file) as TOML.
fn seed_report(config_path: Option<&Path>) -> Result<String> {
    let context = bootstrap::build_context(config_path)?;
    Ok(infra::seed::render(&context.seed)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn seed_report_renders_builtin_seed_without_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");

        let report =
            seed_report(Some(&dir.path().join("missing.toml"))).expect("report must render");

        assert!(report.contains("[[contacts]]"));
        assert!(report.contains("Анна Смирнова"));
        assert!(report.contains("[[messages]]"));
    }

    #[test]
    fn seed_report_uses_seed_file_from_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let seed_path = dir.path().join("seed.toml");
        fs::write(
            &seed_path,
            "[[contacts]]\nid = \"b\"\nname = \"Bob Stone\"\nlast_seen = \"now\"\nonline = true\n",
        )
        .expect("seed written");
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!("[seed]\npath = {:?}\n", seed_path.display().to_string()),
        )
        .expect("config written");

        let report = seed_report(Some(&config_path)).expect("report must render");

        assert!(report.contains("Bob Stone"));
        assert!(report.contains("avatar = \"BS\""));
        assert!(!report.contains("Анна Смирнова"));
    }

    #[test]
    fn seed_report_fails_on_invalid_seed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let seed_path = dir.path().join("seed.toml");
        fs::write(
            &seed_path,
            "[[messages]]\nid = \"1\"\nsender = \"ghost\"\ntext = \"hi\"\ntimestamp = \"10:00\"\n",
        )
        .expect("seed written");
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!("[seed]\npath = {:?}\n", seed_path.display().to_string()),
        )
        .expect("config written");

        let error = seed_report(Some(&config_path)).expect_err("unknown sender must fail");

        assert!(format!("{error:#}").contains("ghost"));
    }
}
