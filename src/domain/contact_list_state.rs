use super::{contact::Contact, input_state::InputState};

/// Cursor and search filter over the contact list.
///
/// The contact slice itself is owned by the session seed; this state only
/// remembers which rows are visible and where the cursor is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactListState {
    query: InputState,
    /// Indexes into the contact slice, in display order.
    visible: Vec<usize>,
    /// Position within `visible`.
    cursor: Option<usize>,
}

impl ContactListState {
    pub fn new(contacts: &[Contact]) -> Self {
        let mut state = Self::default();
        state.refilter(contacts);
        state
    }

    pub fn query(&self) -> &InputState {
        &self.query
    }

    pub fn visible<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        self.visible
            .iter()
            .filter_map(|&index| contacts.get(index))
            .collect()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_contact<'a>(&self, contacts: &'a [Contact]) -> Option<&'a Contact> {
        self.cursor
            .and_then(|position| self.visible.get(position))
            .and_then(|&index| contacts.get(index))
    }

    /// Edits the search query and recomputes the visible rows.
    pub fn edit_query(&mut self, contacts: &[Contact], edit: impl FnOnce(&mut InputState)) {
        edit(&mut self.query);
        self.refilter(contacts);
    }

    pub fn clear_query(&mut self, contacts: &[Contact]) {
        self.edit_query(contacts, InputState::clear);
    }

    pub fn select_next(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };

        let last = self.visible.len().saturating_sub(1);
        self.cursor = Some(std::cmp::min(position.saturating_add(1), last));
    }

    pub fn select_previous(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };

        self.cursor = Some(position.saturating_sub(1));
    }

    fn refilter(&mut self, contacts: &[Contact]) {
        let previous = self
            .cursor
            .and_then(|position| self.visible.get(position))
            .copied();

        self.visible = contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.matches_query(self.query.text()))
            .map(|(index, _)| index)
            .collect();

        self.cursor = resolve_cursor(&self.visible, previous);
    }
}

/// Keeps the cursor on the same contact when it is still visible,
/// otherwise falls back to the first row.
fn resolve_cursor(visible: &[usize], previous: Option<usize>) -> Option<usize> {
    if visible.is_empty() {
        return None;
    }

    previous
        .and_then(|index| visible.iter().position(|&candidate| candidate == index))
        .or(Some(0))
}
