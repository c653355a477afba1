//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panels and inputs
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Hint text such as the disabled submit button or empty states.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn status_line_style() -> Style {
    Style::default().fg(Color::Gray)
}

// =============================================================================
// Contact list styles
// =============================================================================

pub fn contact_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the initials shown in place of an avatar.
pub fn avatar_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for last-seen text (dimmed).
pub fn last_seen_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn kind_tag_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Style for unread count badge (green).
pub fn unread_count_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn online_indicator_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn selected_row_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Marker for the contact whose thread is open.
pub fn open_chat_marker_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Message thread styles
// =============================================================================

/// Style for message sender name (white, bold).
pub fn message_sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn own_sender_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn own_message_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_name_style_is_bold_white() {
        let style = contact_name_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unread_count_style_is_green() {
        let style = unread_count_style();
        assert_eq!(style.fg, Some(Color::Green));
    }

    #[test]
    fn active_border_differs_from_inactive() {
        assert_ne!(active_panel_border_style(), inactive_panel_border_style());
    }

    #[test]
    fn own_sender_is_distinguished_from_contacts() {
        assert_ne!(own_sender_style().fg, message_sender_style().fg);
        assert!(own_sender_style().add_modifier.contains(Modifier::BOLD));
    }
}
