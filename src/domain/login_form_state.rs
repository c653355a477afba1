use super::input_state::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Email,
}

impl LoginField {
    fn other(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormState {
    name: InputState,
    email: InputState,
    focused: LoginField,
}

impl LoginFormState {
    pub fn name(&self) -> &InputState {
        &self.name
    }

    pub fn email(&self) -> &InputState {
        &self.email
    }

    pub fn focused(&self) -> LoginField {
        self.focused
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focused {
            LoginField::Name => &mut self.name,
            LoginField::Email => &mut self.email,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused = self.focused.other();
    }

    /// Submission is enabled only when both fields hold text.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Current field values as `(name, email)`.
    pub fn credentials(&self) -> (String, String) {
        (self.name.text().to_owned(), self.email.text().to_owned())
    }
}
