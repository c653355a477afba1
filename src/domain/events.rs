#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press normalized by the event source.
///
/// Printable keys carry the character itself (`"a"`, `"Я"`); special keys
/// use lowercase names such as `"enter"`, `"esc"`, `"backspace"`, `"tab"`,
/// `"up"`, `"down"`, `"left"`, `"right"`, `"home"`, `"end"`, `"delete"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The typed character, if this is a single printable key without Ctrl.
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_char_accepts_single_characters() {
        assert_eq!(KeyInput::new("q", false).printable_char(), Some('q'));
        assert_eq!(KeyInput::new("Ж", false).printable_char(), Some('Ж'));
        assert_eq!(KeyInput::new(" ", false).printable_char(), Some(' '));
    }

    #[test]
    fn printable_char_rejects_named_and_ctrl_keys() {
        assert_eq!(KeyInput::new("enter", false).printable_char(), None);
        assert_eq!(KeyInput::new("a", true).printable_char(), None);
        assert_eq!(KeyInput::new("", false).printable_char(), None);
    }
}
