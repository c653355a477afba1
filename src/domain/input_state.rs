//! Single-line text buffer with a character cursor.
//!
//! Backs the composer draft, the login form fields and the contact search.

use unicode_width::UnicodeWidthStr;

/// Maximum accepted buffer length, in characters.
pub const MAX_INPUT_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    text: String,
    /// Character index, not byte.
    cursor_position: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Terminal columns taken by the text left of the cursor.
    pub fn cursor_display_width(&self) -> usize {
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text[..byte_idx].width()
    }

    /// Inserts a character at the cursor.
    /// Returns false if the buffer is already at `MAX_INPUT_LENGTH`.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.remove_char_at_cursor();
        }
    }

    /// Delete key.
    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.char_count() {
            self.remove_char_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn remove_char_at_cursor(&mut self) {
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
        self.text.drain(byte_idx..next_byte_idx);
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
impl From<&str> for InputState {
    fn from(text: &str) -> Self {
        let mut state = Self::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }
}
