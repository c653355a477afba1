use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    contact::{Contact, ContactKind},
    login_form_state::{LoginField, LoginFormState},
    session::{Session, SessionPhase},
    shell_state::{ActivePane, ShellState},
};

use super::input_field::{render_input_field, InputField};
use super::message_rendering::{build_thread_elements, element_to_list_item};
use super::styles;

const LOGIN_BOX_WIDTH: u16 = 50;
const LOGIN_BOX_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    match state.session().phase() {
        SessionPhase::LoggedOut => render_login_screen(frame, content_area, state.login_form()),
        SessionPhase::LoggedIn { .. } => render_main_screen(frame, content_area, state),
    }

    let status = Paragraph::new(status_line(state)).style(styles::status_line_style());
    frame.render_widget(status, status_area);
}

fn render_login_screen(frame: &mut Frame<'_>, area: Rect, form: &LoginFormState) {
    let area = centered(area, LOGIN_BOX_WIDTH, LOGIN_BOX_HEIGHT);

    let block = Block::default()
        .title(Span::styled(" msgr ", styles::title_style()))
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [intro_area, name_area, email_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new("Sign in to continue").style(styles::hint_style()),
        intro_area,
    );
    render_input_field(
        frame,
        name_area,
        InputField {
            title: "Name",
            input: form.name(),
            focused: form.focused() == LoginField::Name,
            placeholder: "Your name",
        },
    );
    render_input_field(
        frame,
        email_area,
        InputField {
            title: "Email",
            input: form.email(),
            focused: form.focused() == LoginField::Email,
            placeholder: "you@example.com",
        },
    );
    frame.render_widget(Paragraph::new(submit_hint_line(form)), hint_area);
}

fn submit_hint_line(form: &LoginFormState) -> Line<'static> {
    let style = if form.can_submit() {
        styles::title_style()
    } else {
        styles::hint_style()
    };

    Line::from(Span::styled("[ Enter: log in ]", style))
}

fn render_main_screen(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [left_area, right_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .areas(area);

    let [header_area, search_area, contacts_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(left_area);

    // 3 lines for input: 1 border + 1 text + 1 border
    let [thread_area, composer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(right_area);

    let session = state.session();
    let active_pane = state.active_pane();

    render_user_header(frame, header_area, session);
    render_input_field(
        frame,
        search_area,
        InputField {
            title: "Search",
            input: state.contact_list().query(),
            focused: active_pane == ActivePane::Search,
            placeholder: "Press '/' to search...",
        },
    );
    render_contact_list(frame, contacts_area, state);
    render_thread(frame, thread_area, session);

    let placeholder = if session.selected_contact_id().is_some() {
        "Press 'i' to type a message..."
    } else {
        "Select a contact first"
    };
    let composer_title = if session.draft().is_blank() {
        "Message"
    } else {
        "Message · Enter to send"
    };
    render_input_field(
        frame,
        composer_area,
        InputField {
            title: composer_title,
            input: session.draft(),
            focused: active_pane == ActivePane::Composer,
            placeholder,
        },
    );
}

fn render_user_header(frame: &mut Frame<'_>, area: Rect, session: &Session) {
    let line = match session.user() {
        Some(user) => Line::from(vec![
            Span::styled(format!(" {} ", user.avatar()), styles::avatar_style()),
            Span::raw(" "),
            Span::styled(user.name.clone(), styles::contact_name_style()),
            Span::raw(" "),
            Span::styled(user.email.clone(), styles::last_seen_style()),
        ]),
        None => Line::default(),
    };

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(header, area);
}

fn render_contact_list(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let border_style = if state.active_pane() == ActivePane::Contacts {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let session = state.session();
    let contact_list = state.contact_list();
    let visible = contact_list.visible(session.contacts());
    let title = format!("Contacts ({})", visible.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if visible.is_empty() {
        let empty = Paragraph::new("No contacts match the search")
            .style(styles::hint_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let open_id = session.selected_contact_id();
    let items: Vec<ListItem<'static>> = visible
        .iter()
        .map(|contact| {
            let is_open = open_id == Some(&contact.id);
            ListItem::new(contact_row_line(contact, is_open, inner_width))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selected_row_style());

    let mut list_state = ListState::default();
    list_state.select(contact_list.cursor());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn contact_row_line(contact: &Contact, is_open: bool, width: usize) -> Line<'static> {
    let marker = if is_open { "▌" } else { " " };

    let mut left = vec![
        Span::styled(marker.to_owned(), styles::open_chat_marker_style()),
        Span::styled(format!(" {} ", contact.avatar), styles::avatar_style()),
        Span::raw(" "),
        Span::styled(contact.name.clone(), styles::contact_name_style()),
    ];
    if contact.online {
        left.push(Span::styled(
            " \u{25CF}".to_owned(),
            styles::online_indicator_style(),
        ));
    }
    if contact.kind != ContactKind::Direct {
        left.push(Span::styled(
            format!(" [{}]", contact.kind.as_label()),
            styles::kind_tag_style(),
        ));
    }

    let mut right = vec![Span::styled(
        contact.last_seen.clone(),
        styles::last_seen_style(),
    )];
    if contact.unread_count > 0 {
        right.push(Span::styled(
            format!(" [{}]", contact.unread_count),
            styles::unread_count_style(),
        ));
    }

    let used = spans_width(&left) + spans_width(&right);
    let padding = width.saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(right);
    Line::from(spans)
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}

fn render_thread(frame: &mut Frame<'_>, area: Rect, session: &Session) {
    let block = Block::default()
        .title(thread_title(session))
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if session.selected_contact().is_none() {
        let hint = Paragraph::new("Select a contact to start chatting")
            .style(styles::hint_style())
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let elements = build_thread_elements(session.messages(), session.contacts());
    let items: Vec<ListItem<'static>> = elements.iter().map(element_to_list_item).collect();

    // Keep the newest message in view.
    let mut list_state = ListState::default();
    list_state.select(elements.len().checked_sub(1));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn thread_title(session: &Session) -> String {
    match session.selected_contact() {
        Some(contact) => format!("{} · {}", contact.name, contact.last_seen),
        None => "Messages".to_owned(),
    }
}

fn status_line(state: &ShellState) -> String {
    let session = state.session();
    let Some(user) = session.user() else {
        return "Tab: switch field | Enter: log in | Esc: quit".to_owned();
    };

    let nav_hint = match state.active_pane() {
        ActivePane::Contacts => {
            "j/k: navigate | l/Enter: open chat | i: compose | /: search | x: log out | q: quit"
        }
        ActivePane::Search => "type to filter | Enter: done | Esc: clear",
        ActivePane::Composer => "Enter: send | Esc: back to contacts",
    };
    format!(
        "{} | messages: {} | {nav_hint}",
        user.name,
        session.messages().len()
    )
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::{
        contact::{initials, ContactId},
        seed::SeedData,
        session::{apply, LogoutPolicy, SessionCommand},
    };
    use crate::infra::stubs::FixedClock;

    const TEST_WIDTH: usize = 50;

    fn contact(name: &str, online: bool, kind: ContactKind, unread_count: u32) -> Contact {
        Contact {
            id: ContactId::new("1"),
            name: name.to_owned(),
            avatar: initials(name),
            last_seen: "вчера".to_owned(),
            online,
            kind,
            unread_count,
        }
    }

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn logged_in_state(select: Option<&str>) -> ShellState {
        let clock = FixedClock::at(12, 0);
        let session = Session::new(Arc::new(SeedData::builtin()), LogoutPolicy::default());
        let (mut session, _) = apply(
            &session,
            SessionCommand::SubmitLogin {
                name: "Ann".to_owned(),
                email: "a@b.com".to_owned(),
            },
            &clock,
        );
        if let Some(id) = select {
            session = apply(&session, SessionCommand::SelectContact(ContactId::new(id)), &clock).0;
        }
        ShellState::new(session)
    }

    fn render_to_text(state: &ShellState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("render must succeed");

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn contact_row_shows_avatar_name_and_last_seen() {
        let line = contact_row_line(
            &contact("Елена Козлова", false, ContactKind::Direct, 0),
            false,
            TEST_WIDTH,
        );
        let text = line_to_string(&line);

        assert!(text.contains("ЕК"));
        assert!(text.contains("Елена Козлова"));
        assert!(text.ends_with("вчера"));
        assert!(!text.contains('\u{25CF}'));
        assert!(!text.contains("[direct]"));
    }

    #[test]
    fn contact_row_shows_online_dot_kind_tag_and_unread_badge() {
        let line = contact_row_line(
            &contact("Команда проекта", true, ContactKind::Group, 2),
            false,
            TEST_WIDTH,
        );
        let text = line_to_string(&line);

        assert!(text.contains('\u{25CF}'));
        assert!(text.contains("[group]"));
        assert!(text.ends_with("[2]"));
    }

    #[test]
    fn contact_row_marks_open_chat() {
        let contact = contact("Анна Смирнова", true, ContactKind::Direct, 0);

        assert!(line_to_string(&contact_row_line(&contact, true, TEST_WIDTH)).starts_with('▌'));
        assert!(line_to_string(&contact_row_line(&contact, false, TEST_WIDTH)).starts_with(' '));
    }

    #[test]
    fn contact_row_pads_to_width() {
        let line = contact_row_line(
            &contact("Ann", false, ContactKind::Direct, 0),
            false,
            TEST_WIDTH,
        );

        assert_eq!(line.width(), TEST_WIDTH);
    }

    #[test]
    fn submit_hint_is_dimmed_until_both_fields_filled() {
        let mut form = LoginFormState::default();
        assert_eq!(submit_hint_line(&form).spans[0].style, styles::hint_style());

        form.focused_input_mut().insert_char('A');
        form.toggle_focus();
        form.focused_input_mut().insert_char('a');

        assert_eq!(submit_hint_line(&form).spans[0].style, styles::title_style());
    }

    #[test]
    fn thread_title_names_selected_contact() {
        let state = logged_in_state(Some("2"));

        assert_eq!(thread_title(state.session()), "Михаил Петров · 5 мин назад");
    }

    #[test]
    fn thread_title_without_selection() {
        let state = logged_in_state(None);

        assert_eq!(thread_title(state.session()), "Messages");
    }

    #[test]
    fn status_line_on_login_screen_lists_form_keys() {
        let session = Session::new(Arc::new(SeedData::builtin()), LogoutPolicy::default());
        let state = ShellState::new(session);

        assert!(status_line(&state).contains("Enter: log in"));
    }

    #[test]
    fn status_line_reflects_active_pane() {
        let mut state = logged_in_state(Some("1"));
        assert!(status_line(&state).contains("x: log out"));
        assert!(status_line(&state).starts_with("Ann | messages: 3"));

        state.set_active_pane(ActivePane::Composer);
        assert!(status_line(&state).contains("Enter: send"));
    }

    #[test]
    fn renders_login_screen_when_logged_out() {
        let session = Session::new(Arc::new(SeedData::builtin()), LogoutPolicy::default());
        let text = render_to_text(&ShellState::new(session));

        assert!(text.contains("Sign in to continue"));
        assert!(text.contains("Email"));
        assert!(!text.contains("Contacts"));
    }

    #[test]
    fn renders_contacts_and_thread_when_chat_open() {
        let text = render_to_text(&logged_in_state(Some("1")));

        assert!(text.contains("Contacts (7)"));
        assert!(text.contains("Дмитрий Волков"));
        assert!(text.contains("Привет! Как дела?"));
        assert!(text.contains("You:"));
    }

    #[test]
    fn renders_select_hint_without_open_chat() {
        let text = render_to_text(&logged_in_state(None));

        assert!(text.contains("Select a contact to start chatting"));
        assert!(!text.contains("Привет! Как дела?"));
    }

    #[test]
    fn centered_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);

        assert_eq!(centered(area, 50, 12), area);
    }
}
