//! Message thread rendering.
//!
//! Consecutive messages from the same sender show the sender name once;
//! follow-up messages carry only the time column.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::{
    contact::Contact,
    message::{Message, Sender},
};

use super::styles;

/// Label used for messages sent by the logged-in user.
pub const OWN_SENDER_LABEL: &str = "You";

const TIME_COLUMN_INDENT: &str = "      ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadElement {
    pub time: String,
    /// Present on the first message of a sender run.
    pub sender: Option<String>,
    pub own: bool,
    pub text: String,
}

/// Builds thread rows, resolving sender ids to contact names.
pub fn build_thread_elements(messages: &[Message], contacts: &[Contact]) -> Vec<ThreadElement> {
    let mut elements = Vec::with_capacity(messages.len());
    let mut prev_sender: Option<&Sender> = None;

    for message in messages {
        let sender = (prev_sender != Some(&message.sender))
            .then(|| sender_label(&message.sender, contacts));

        elements.push(ThreadElement {
            time: message.timestamp.clone(),
            sender,
            own: message.sender.is_me(),
            text: message.text.clone(),
        });

        prev_sender = Some(&message.sender);
    }

    elements
}

pub fn element_to_list_item(element: &ThreadElement) -> ListItem<'static> {
    let text_style = if element.own {
        styles::own_message_text_style()
    } else {
        styles::message_text_style()
    };
    let time = Span::styled(format!("{:>5} ", element.time), styles::message_time_style());

    let mut lines = Vec::new();
    let mut text_lines = element.text.lines();

    match &element.sender {
        Some(name) => {
            let sender_style = if element.own {
                styles::own_sender_style()
            } else {
                styles::message_sender_style()
            };
            lines.push(Line::from(vec![
                time,
                Span::styled(format!("{name}:"), sender_style),
            ]));
        }
        None => {
            let first = text_lines.next().unwrap_or_default();
            lines.push(Line::from(vec![
                time,
                Span::styled(first.to_owned(), text_style),
            ]));
        }
    }

    for text_line in text_lines {
        lines.push(Line::from(vec![
            Span::raw(TIME_COLUMN_INDENT),
            Span::styled(text_line.to_owned(), text_style),
        ]));
    }

    ListItem::new(lines)
}

fn sender_label(sender: &Sender, contacts: &[Contact]) -> String {
    match sender {
        Sender::Me => OWN_SENDER_LABEL.to_owned(),
        Sender::Contact(id) => contacts
            .iter()
            .find(|contact| &contact.id == id)
            .map(|contact| contact.name.clone())
            .unwrap_or_else(|| id.to_string()),
    }
}
