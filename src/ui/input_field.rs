//! Bordered single-line input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::input_state::InputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

pub struct InputField<'a> {
    pub title: &'a str,
    pub input: &'a InputState,
    pub focused: bool,
    /// Shown when the input is empty; ignored while focused.
    pub placeholder: &'a str,
}

pub fn render_input_field(frame: &mut Frame<'_>, area: Rect, field: InputField<'_>) {
    let border_style = if field.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_input_line(field.input, field.focused, field.placeholder);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(field.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if field.focused {
        let offset = PROMPT_SYMBOL.len() + field.input.cursor_display_width();
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(offset.min(u16::MAX as usize) as u16)
            .min(max_x);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_input_line(input: &InputState, focused: bool, placeholder: &str) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.is_empty() && !focused {
        Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input.text().to_owned(), styles::input_text_style()),
        ])
    }
}
