//! Immutable sample data a session starts from.

use std::collections::HashSet;

use thiserror::Error;

use super::{
    contact::{initials, Contact, ContactId, ContactKind},
    message::{Message, MessageId, Sender},
    user::ME_ID,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("contact id must not be empty")]
    EmptyContactId,
    #[error("contact id `{0}` is reserved for the logged-in user")]
    ReservedContactId(ContactId),
    #[error("duplicate contact id `{0}`")]
    DuplicateContact(ContactId),
    #[error("duplicate message id `{0}`")]
    DuplicateMessage(MessageId),
    #[error("message `{message}` references unknown sender `{sender}`")]
    UnknownSender { message: MessageId, sender: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    contacts: Vec<Contact>,
    messages: Vec<Message>,
}

impl SeedData {
    pub fn new(contacts: Vec<Contact>, messages: Vec<Message>) -> Result<Self, SeedError> {
        let mut contact_ids = HashSet::new();
        for contact in &contacts {
            if contact.id.as_str().is_empty() {
                return Err(SeedError::EmptyContactId);
            }
            if contact.id.as_str() == ME_ID {
                return Err(SeedError::ReservedContactId(contact.id.clone()));
            }
            if !contact_ids.insert(&contact.id) {
                return Err(SeedError::DuplicateContact(contact.id.clone()));
            }
        }

        let mut message_ids = HashSet::new();
        for message in &messages {
            if !message_ids.insert(&message.id) {
                return Err(SeedError::DuplicateMessage(message.id.clone()));
            }
            if let Sender::Contact(id) = &message.sender {
                if !contact_ids.contains(id) {
                    return Err(SeedError::UnknownSender {
                        message: message.id.clone(),
                        sender: id.to_string(),
                    });
                }
            }
        }

        Ok(Self { contacts, messages })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// Sample data shipped with the binary.
    pub fn builtin() -> Self {
        let contacts = vec![
            seed_contact("1", "Анна Смирнова", "онлайн", true, ContactKind::Direct, 0),
            seed_contact("2", "Михаил Петров", "5 мин назад", false, ContactKind::Direct, 0),
            seed_contact("3", "Елена Козлова", "вчера", false, ContactKind::Direct, 0),
            seed_contact("4", "Дмитрий Волков", "онлайн", true, ContactKind::Direct, 0),
            seed_contact("5", "Команда проекта", "3 участника", false, ContactKind::Group, 2),
            seed_contact("6", "Новости", "канал", false, ContactKind::Channel, 5),
            seed_contact("7", "Помощник", "бот", true, ContactKind::Bot, 0),
        ];
        let messages = vec![
            seed_message("1", "1", "Привет! Как дела?", "14:30"),
            seed_message("2", "me", "Привет! Всё хорошо, спасибо!", "14:32"),
            seed_message("3", "1", "Отлично! Как проект продвигается?", "14:33"),
        ];

        Self { contacts, messages }
    }
}

fn seed_contact(
    id: &str,
    name: &str,
    last_seen: &str,
    online: bool,
    kind: ContactKind,
    unread_count: u32,
) -> Contact {
    Contact {
        id: ContactId::new(id),
        name: name.to_owned(),
        avatar: initials(name),
        last_seen: last_seen.to_owned(),
        online,
        kind,
        unread_count,
    }
}

fn seed_message(id: &str, sender: &str, text: &str, timestamp: &str) -> Message {
    Message {
        id: MessageId::new(id),
        sender: Sender::parse(sender),
        text: text.to_owned(),
        timestamp: timestamp.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_passes_validation() {
        let builtin = SeedData::builtin();

        let validated = SeedData::new(builtin.contacts.clone(), builtin.messages.clone());

        assert_eq!(validated, Ok(builtin));
    }

    #[test]
    fn builtin_seed_contains_sample_contacts() {
        let seed = SeedData::builtin();

        let first = seed.contact(&ContactId::new("1")).expect("contact 1 exists");
        assert_eq!(first.name, "Анна Смирнова");
        assert_eq!(first.avatar, "АС");
        assert!(first.online);
        assert_eq!(seed.messages().len(), 3);
        assert_eq!(seed.messages()[1].sender, Sender::Me);
    }

    #[test]
    fn rejects_duplicate_contact_ids() {
        let contacts = vec![
            seed_contact("1", "A", "", false, ContactKind::Direct, 0),
            seed_contact("1", "B", "", false, ContactKind::Direct, 0),
        ];

        let err = SeedData::new(contacts, vec![]).expect_err("must fail");

        assert_eq!(err, SeedError::DuplicateContact(ContactId::new("1")));
    }

    #[test]
    fn rejects_empty_contact_id() {
        let contacts = vec![seed_contact("", "A", "", false, ContactKind::Direct, 0)];

        let err = SeedData::new(contacts, vec![]).expect_err("must fail");

        assert_eq!(err, SeedError::EmptyContactId);
    }

    #[test]
    fn rejects_contact_with_reserved_me_id() {
        let contacts = vec![seed_contact("me", "Impostor", "", false, ContactKind::Direct, 0)];
        let messages = vec![seed_message("10", "me", "hi", "10:00")];

        let err = SeedData::new(contacts, messages).expect_err("must fail");

        assert_eq!(err, SeedError::ReservedContactId(ContactId::new("me")));
    }

    #[test]
    fn rejects_message_from_unknown_contact() {
        let contacts = vec![seed_contact("1", "A", "", false, ContactKind::Direct, 0)];
        let messages = vec![seed_message("10", "9", "hi", "10:00")];

        let err = SeedData::new(contacts, messages).expect_err("must fail");

        assert_eq!(
            err,
            SeedError::UnknownSender {
                message: MessageId::new("10"),
                sender: "9".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_message_ids() {
        let messages = vec![
            seed_message("1", "me", "a", "10:00"),
            seed_message("1", "me", "b", "10:01"),
        ];

        let err = SeedData::new(vec![], messages).expect_err("must fail");

        assert_eq!(err, SeedError::DuplicateMessage(MessageId::new("1")));
    }

    #[test]
    fn accepts_messages_from_me_without_contacts() {
        let seed = SeedData::new(vec![], vec![seed_message("1", "me", "note", "09:00")])
            .expect("seed should validate");

        assert!(seed.contacts().is_empty());
        assert_eq!(seed.messages().len(), 1);
    }
}
