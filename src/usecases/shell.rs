use anyhow::Result;

use crate::{
    domain::{
        clock::Clock,
        events::{AppEvent, KeyInput},
        input_state::InputState,
        session::{self, CommandOutcome, Session, SessionCommand},
        shell_state::{ActivePane, ShellState},
    },
    infra::redaction::mask_email,
};

use super::contracts::ShellOrchestrator;

pub struct DefaultShellOrchestrator<C>
where
    C: Clock,
{
    state: ShellState,
    clock: C,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: Clock,
{
    pub fn new(session: Session, clock: C) -> Self {
        Self {
            state: ShellState::new(session),
            clock,
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> CommandOutcome {
        let name = command.name();
        let (next, outcome) = session::apply(self.state.session(), command, &self.clock);
        self.state.replace_session(next);

        tracing::debug!(command = name, outcome = ?outcome, "session command handled");
        outcome
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl && key.key == "c" {
            self.state.stop();
            return;
        }

        if !self.state.session().is_logged_in() {
            self.handle_login_key(&key);
            return;
        }

        match self.state.active_pane() {
            ActivePane::Contacts => self.handle_contacts_key(&key),
            ActivePane::Search => self.handle_search_key(&key),
            ActivePane::Composer => self.handle_composer_key(&key),
        }
    }

    fn handle_login_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" => self.submit_login(),
            "tab" | "up" | "down" => self.state.login_form_mut().toggle_focus(),
            "esc" => self.state.stop(),
            _ => {
                edit_input(self.state.login_form_mut().focused_input_mut(), key);
            }
        }
    }

    fn handle_contacts_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.contact_list_parts().0.select_next(),
            "k" | "up" => self.state.contact_list_parts().0.select_previous(),
            "enter" | "l" | "right" => self.open_contact_under_cursor(),
            "i" => {
                if self.state.session().selected_contact_id().is_some() {
                    self.state.set_active_pane(ActivePane::Composer);
                }
            }
            "/" => self.state.set_active_pane(ActivePane::Search),
            "x" => self.logout(),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" | "down" => self.state.set_active_pane(ActivePane::Contacts),
            "esc" => {
                let (contact_list, session) = self.state.contact_list_parts();
                contact_list.clear_query(session.contacts());
                self.state.set_active_pane(ActivePane::Contacts);
            }
            _ => {
                let (contact_list, session) = self.state.contact_list_parts();
                contact_list.edit_query(session.contacts(), |query| {
                    edit_input(query, key);
                });
            }
        }
    }

    fn handle_composer_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" => self.send_draft(),
            "esc" => self.state.set_active_pane(ActivePane::Contacts),
            _ => {
                edit_input(self.state.session_mut().draft_mut(), key);
            }
        }
    }

    fn submit_login(&mut self) {
        let (name, email) = self.state.login_form().credentials();
        let masked_email = mask_email(&email);

        let outcome = self.dispatch(SessionCommand::SubmitLogin {
            name: name.clone(),
            email,
        });

        if outcome.is_applied() {
            tracing::info!(user = %name, email = %masked_email, "logged in");
            self.state.set_active_pane(ActivePane::Contacts);
        }
    }

    fn open_contact_under_cursor(&mut self) {
        let session = self.state.session();
        let Some(contact_id) = self
            .state
            .contact_list()
            .cursor_contact(session.contacts())
            .map(|contact| contact.id.clone())
        else {
            return;
        };

        if self.dispatch(SessionCommand::SelectContact(contact_id)).is_applied() {
            self.state.set_active_pane(ActivePane::Composer);
        }
    }

    fn send_draft(&mut self) {
        let text = self.state.session().draft().text().to_owned();

        if self.dispatch(SessionCommand::SendMessage { text }).is_applied() {
            tracing::debug!(
                messages = self.state.session().messages().len(),
                "message appended"
            );
        }
    }

    fn logout(&mut self) {
        if self.dispatch(SessionCommand::Logout).is_applied() {
            tracing::info!(
                messages = self.state.session().messages().len(),
                "logged out"
            );
            self.state.set_active_pane(ActivePane::Contacts);
        }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}

/// Applies an editing key to a text buffer. Returns false for keys that
/// are not edits.
fn edit_input(input: &mut InputState, key: &KeyInput) -> bool {
    match key.key.as_str() {
        "backspace" => input.delete_char_before(),
        "delete" => input.delete_char_at(),
        "left" => input.move_cursor_left(),
        "right" => input.move_cursor_right(),
        "home" => input.move_cursor_home(),
        "end" => input.move_cursor_end(),
        _ => {
            return match key.printable_char() {
                Some(ch) => input.insert_char(ch),
                None => false,
            };
        }
    }

    true
}
