use std::fmt;

use chrono::{DateTime, Local};

use super::{contact::ContactId, user::ME_ID};

/// Display format of message timestamps.
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a message: the logged-in user or one of the contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Me,
    Contact(ContactId),
}

impl Sender {
    /// Parses the textual sender id, where `"me"` is the logged-in user.
    pub fn parse(value: &str) -> Self {
        if value == ME_ID {
            Self::Me
        } else {
            Self::Contact(ContactId::new(value))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Me => ME_ID,
            Self::Contact(id) => id.as_str(),
        }
    }

    pub fn is_me(&self) -> bool {
        matches!(self, Self::Me)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    /// `HH:MM` label shown next to the message.
    pub timestamp: String,
}

impl Message {
    /// Builds a message authored by the logged-in user at `at`.
    pub fn outgoing(text: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            id: MessageId::generate(),
            sender: Sender::Me,
            text: text.into(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
