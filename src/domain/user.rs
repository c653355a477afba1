use super::contact::initials;

/// Sender and user id reserved for the logged-in user.
pub const ME_ID: &str = "me";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn me(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ME_ID.to_owned(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn avatar(&self) -> String {
        initials(&self.name)
    }
}
