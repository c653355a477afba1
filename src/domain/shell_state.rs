use super::{
    contact_list_state::ContactListState, login_form_state::LoginFormState, session::Session,
};

/// Focus target on the main screen; the login screen has its own field focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Contacts,
    Search,
    Composer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    session: Session,
    login_form: LoginFormState,
    contact_list: ContactListState,
    active_pane: ActivePane,
}

impl ShellState {
    pub fn new(session: Session) -> Self {
        let contact_list = ContactListState::new(session.contacts());
        Self {
            running: true,
            session,
            login_form: LoginFormState::default(),
            contact_list,
            active_pane: ActivePane::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn replace_session(&mut self, session: Session) {
        self.session = session;
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn login_form_mut(&mut self) -> &mut LoginFormState {
        &mut self.login_form
    }

    pub fn contact_list(&self) -> &ContactListState {
        &self.contact_list
    }

    /// Contact list state together with the contacts it indexes into.
    pub fn contact_list_parts(&mut self) -> (&mut ContactListState, &Session) {
        (&mut self.contact_list, &self.session)
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }
}
