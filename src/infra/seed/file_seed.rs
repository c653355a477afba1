use serde::{Deserialize, Serialize};

use crate::domain::{
    contact::{initials, Contact, ContactId, ContactKind},
    message::{Message, MessageId, Sender},
    seed::{SeedData, SeedError},
};

/// On-disk shape of a seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FileSeed {
    #[serde(default)]
    pub contacts: Vec<FileContact>,
    #[serde(default)]
    pub messages: Vec<FileMessage>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileContactKind {
    #[default]
    Direct,
    Group,
    Channel,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileContact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_seen: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub kind: FileContactKind,
    #[serde(default)]
    pub unread: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub timestamp: String,
}

impl FileSeed {
    pub fn into_seed(self) -> Result<SeedData, SeedError> {
        let contacts = self.contacts.into_iter().map(FileContact::into_contact).collect();
        let messages = self.messages.into_iter().map(FileMessage::into_message).collect();

        SeedData::new(contacts, messages)
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        Self {
            contacts: seed.contacts().iter().map(FileContact::from_contact).collect(),
            messages: seed.messages().iter().map(FileMessage::from_message).collect(),
        }
    }
}

impl From<FileContactKind> for ContactKind {
    fn from(kind: FileContactKind) -> Self {
        match kind {
            FileContactKind::Direct => Self::Direct,
            FileContactKind::Group => Self::Group,
            FileContactKind::Channel => Self::Channel,
            FileContactKind::Bot => Self::Bot,
        }
    }
}

impl From<ContactKind> for FileContactKind {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Direct => Self::Direct,
            ContactKind::Group => Self::Group,
            ContactKind::Channel => Self::Channel,
            ContactKind::Bot => Self::Bot,
        }
    }
}

impl FileContact {
    fn into_contact(self) -> Contact {
        let avatar = self
            .avatar
            .filter(|avatar| !avatar.trim().is_empty())
            .unwrap_or_else(|| initials(&self.name));

        Contact {
            id: ContactId::new(self.id),
            name: self.name,
            avatar,
            last_seen: self.last_seen,
            online: self.online,
            kind: self.kind.into(),
            unread_count: self.unread,
        }
    }

    fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            name: contact.name.clone(),
            avatar: Some(contact.avatar.clone()),
            last_seen: contact.last_seen.clone(),
            online: contact.online,
            kind: contact.kind.into(),
            unread: contact.unread_count,
        }
    }
}

impl FileMessage {
    fn into_message(self) -> Message {
        Message {
            id: MessageId::new(self.id),
            sender: Sender::parse(&self.sender),
            text: self.text,
            timestamp: self.timestamp,
        }
    }

    fn from_message(message: &Message) -> Self {
        Self {
            id: message.id.as_str().to_owned(),
            sender: message.sender.as_str().to_owned(),
            text: message.text.clone(),
            timestamp: message.timestamp.clone(),
        }
    }
}
