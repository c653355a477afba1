//! Conversation session state machine.
//!
//! A [`Session`] is either logged out or logged in with a user and an
//! optional chat selection. It changes only through [`apply`], which takes
//! one [`SessionCommand`] and returns the next session. Guards never fail
//! loudly: a command that does not fit the current state is reported as
//! [`CommandOutcome::Ignored`] and the returned session equals the input.

use std::sync::Arc;

use super::{
    clock::Clock,
    contact::{Contact, ContactId},
    input_state::InputState,
    message::Message,
    seed::SeedData,
    user::User,
};

/// What happens to the message list on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPolicy {
    /// Restore the seed messages.
    #[default]
    ResetMessages,
    /// Keep everything sent during the session.
    KeepMessages,
}

impl LogoutPolicy {
    pub fn from_reset_flag(reset_messages: bool) -> Self {
        if reset_messages {
            Self::ResetMessages
        } else {
            Self::KeepMessages
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatSelection {
    NoChatSelected,
    ChatSelected(ContactId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn { user: User, selection: ChatSelection },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SubmitLogin { name: String, email: String },
    SelectContact(ContactId),
    Logout,
    SendMessage { text: String },
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitLogin { .. } => "submit_login",
            Self::SelectContact(_) => "select_contact",
            Self::Logout => "logout",
            Self::SendMessage { .. } => "send_message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyLoggedIn,
    IncompleteCredentials,
    NotLoggedIn,
    UnknownContact,
    NoChatSelected,
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    seed: Arc<SeedData>,
    logout_policy: LogoutPolicy,
    phase: SessionPhase,
    messages: Vec<Message>,
    draft: InputState,
}

impl Session {
    pub fn new(seed: Arc<SeedData>, logout_policy: LogoutPolicy) -> Self {
        let messages = seed.messages().to_vec();
        Self {
            seed,
            logout_policy,
            phase: SessionPhase::LoggedOut,
            messages,
            draft: InputState::default(),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, SessionPhase::LoggedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::LoggedIn { user, .. } => Some(user),
            SessionPhase::LoggedOut => None,
        }
    }

    pub fn selected_contact_id(&self) -> Option<&ContactId> {
        match &self.phase {
            SessionPhase::LoggedIn {
                selection: ChatSelection::ChatSelected(id),
                ..
            } => Some(id),
            _ => None,
        }
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected_contact_id().and_then(|id| self.contact(id))
    }

    pub fn contacts(&self) -> &[Contact] {
        self.seed.contacts()
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.seed.contact(id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &InputState {
        &self.draft
    }

    /// Direct access to the composer buffer for keystroke edits.
    pub fn draft_mut(&mut self) -> &mut InputState {
        &mut self.draft
    }

    fn submit_login(&mut self, name: String, email: String) -> CommandOutcome {
        if self.is_logged_in() {
            return CommandOutcome::Ignored(IgnoreReason::AlreadyLoggedIn);
        }
        if name.is_empty() || email.is_empty() {
            return CommandOutcome::Ignored(IgnoreReason::IncompleteCredentials);
        }

        self.phase = SessionPhase::LoggedIn {
            user: User::me(name, email),
            selection: ChatSelection::NoChatSelected,
        };
        CommandOutcome::Applied
    }

    fn select_contact(&mut self, id: ContactId) -> CommandOutcome {
        let known = self.seed.contact(&id).is_some();
        let SessionPhase::LoggedIn { selection, .. } = &mut self.phase else {
            return CommandOutcome::Ignored(IgnoreReason::NotLoggedIn);
        };
        if !known {
            return CommandOutcome::Ignored(IgnoreReason::UnknownContact);
        }

        *selection = ChatSelection::ChatSelected(id);
        CommandOutcome::Applied
    }

    fn logout(&mut self) -> CommandOutcome {
        if !self.is_logged_in() {
            return CommandOutcome::Ignored(IgnoreReason::NotLoggedIn);
        }

        self.phase = SessionPhase::LoggedOut;
        self.draft.clear();
        if self.logout_policy == LogoutPolicy::ResetMessages {
            self.messages = self.seed.messages().to_vec();
        }
        CommandOutcome::Applied
    }

    fn send_message(&mut self, text: String, clock: &dyn Clock) -> CommandOutcome {
        if !self.is_logged_in() {
            return CommandOutcome::Ignored(IgnoreReason::NotLoggedIn);
        }
        if self.selected_contact_id().is_none() {
            return CommandOutcome::Ignored(IgnoreReason::NoChatSelected);
        }
        if text.trim().is_empty() {
            return CommandOutcome::Ignored(IgnoreReason::EmptyMessage);
        }

        self.messages.push(Message::outgoing(text, clock.now()));
        self.draft.clear();
        CommandOutcome::Applied
    }
}

/// Applies one command to `session` and returns the next session.
pub fn apply(
    session: &Session,
    command: SessionCommand,
    clock: &dyn Clock,
) -> (Session, CommandOutcome) {
    let mut next = session.clone();
    let outcome = match command {
        SessionCommand::SubmitLogin { name, email } => next.submit_login(name, email),
        SessionCommand::SelectContact(id) => next.select_contact(id),
        SessionCommand::Logout => next.logout(),
        SessionCommand::SendMessage { text } => next.send_message(text, clock),
    };

    match outcome {
        CommandOutcome::Applied => (next, outcome),
        CommandOutcome::Ignored(_) => (session.clone(), outcome),
    }
}
