use std::{path::Path, sync::Arc};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::session::{LogoutPolicy, Session},
    infra::{
        self,
        clock::SystemClock,
        config::{AppConfig, FileConfigAdapter, LogConfig},
        contracts::{ConfigAdapter, SeedAdapter},
        error::AppError,
        seed::FileSeedAdapter,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads config, installs file logging, then loads seed data.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard)> {
    let config = FileConfigAdapter::new(config_path).load()?;
    let seed_adapter = FileSeedAdapter::new(config.seed.path.as_deref());

    let (context, guard) = bootstrap_with(config, &seed_adapter, infra::logging::init)?;
    tracing::info!(config = ?config_path, "using config");

    Ok((context, guard))
}

/// Seed loading runs after `init_logging`, so its events reach the log.
fn bootstrap_with<G>(
    config: AppConfig,
    seed_adapter: &dyn SeedAdapter,
    init_logging: impl FnOnce(&LogConfig) -> Result<G, AppError>,
) -> Result<(AppContext, G)> {
    let guard = init_logging(&config.logging)?;
    let context = build_context_with(config, seed_adapter)?;

    let seed_source = context
        .config
        .seed
        .path
        .as_deref()
        .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string());
    tracing::info!(
        seed = %seed_source,
        contacts = context.seed.contacts().len(),
        "context bootstrapped"
    );

    Ok((context, guard))
}

pub fn build_context(config_path: Option<&Path>) -> Result<AppContext> {
    let config = FileConfigAdapter::new(config_path).load()?;
    let seed_adapter = FileSeedAdapter::new(config.seed.path.as_deref());

    build_context_with(config, &seed_adapter)
}

fn build_context_with(config: AppConfig, seed_adapter: &dyn SeedAdapter) -> Result<AppContext> {
    let seed = seed_adapter.load()?;
    Ok(AppContext::new(config, seed))
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let policy = LogoutPolicy::from_reset_flag(context.config.session.reset_messages_on_logout);
    let session = Session::new(Arc::clone(&context.seed), policy);

    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(DefaultShellOrchestrator::new(session, SystemClock)),
    }
}
