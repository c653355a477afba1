use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use crate::{
    infra::redaction::mask_email,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        contacts = context.seed.contacts().len(),
        messages = context.seed.messages().len(),
        "starting TUI shell"
    );

    let mut session = TerminalSession::new()?;
    run_event_loop(session.terminal_mut(), event_source, orchestrator)?;

    let state = orchestrator.state();
    match state.session().user() {
        Some(user) => tracing::info!(
            user = %user.name,
            email = %mask_email(&user.email),
            messages = state.session().messages().len(),
            "shell stopped while logged in"
        ),
        None => tracing::info!("shell stopped"),
    }

    Ok(())
}

/// Draws, then feeds one event to the orchestrator, until it stops running.
fn run_event_loop<B>(
    terminal: &mut Terminal<B>,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()>
where
    B: Backend,
{
    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
