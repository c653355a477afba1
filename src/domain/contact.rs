use std::fmt;

/// Identifier of a contact in the seed list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of conversation partner, used for the row tag in the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactKind {
    /// 1-to-1 conversation with a person.
    #[default]
    Direct,
    Group,
    Channel,
    Bot,
}

impl ContactKind {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
            Self::Channel => "channel",
            Self::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// Short label drawn in place of an avatar picture.
    pub avatar: String,
    /// Free-form presence text such as "online" or "5 min ago".
    pub last_seen: String,
    pub online: bool,
    pub kind: ContactKind,
    pub unread_count: u32,
}

impl Contact {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Builds an avatar label from the first character of each word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact {
            id: ContactId::new("1"),
            name: name.to_owned(),
            avatar: initials(name),
            last_seen: "online".to_owned(),
            online: true,
            kind: ContactKind::Direct,
            unread_count: 0,
        }
    }

    #[test]
    fn initials_take_first_char_of_each_word() {
        assert_eq!(initials("Анна Смирнова"), "АС");
        assert_eq!(initials("  ann   lee "), "AL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert!(contact("Михаил Петров").matches_query("   "));
    }

    #[test]
    fn query_matches_name_substring_ignoring_case() {
        let contact = contact("Михаил Петров");

        assert!(contact.matches_query("петр"));
        assert!(contact.matches_query("МИХ"));
        assert!(!contact.matches_query("анна"));
    }
}
