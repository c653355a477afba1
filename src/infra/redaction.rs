use std::{io, panic};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

const REDACTED: &str = "[REDACTED]";

/// Masks an email address for logs: `ann@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        None => REDACTED.to_owned(),
    }
}

/// Masks every whitespace-separated chunk that looks like an email address.
/// Whitespace between chunks is kept as is.
pub fn redact_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while !rest.is_empty() {
        let chunk_start = rest.find(|ch: char| !ch.is_whitespace()).unwrap_or(rest.len());
        output.push_str(&rest[..chunk_start]);
        rest = &rest[chunk_start..];

        let chunk_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let chunk = &rest[..chunk_end];
        if chunk.contains('@') {
            output.push_str(&mask_email(chunk));
        } else {
            output.push_str(chunk);
        }
        rest = &rest[chunk_end..];
    }

    output
}

/// Restores the terminal before reporting a panic, so the message is not
/// swallowed by the alternate screen.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "msgr panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("msgr panic: {}", scrubbed);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_email_keeps_first_char_and_domain() {
        assert_eq!(mask_email("ann@example.com"), "a***@example.com");
        assert_eq!(mask_email("@b.com"), "***@b.com");
        assert_eq!(mask_email("Анна@почта.рф"), "А***@почта.рф");
    }

    #[test]
    fn mask_email_redacts_values_without_at_sign() {
        assert_eq!(mask_email("not-an-email"), REDACTED);
    }

    #[test]
    fn redact_text_masks_only_email_chunks() {
        let output = redact_text("login failed for ann@example.com today");

        assert_eq!(output, "login failed for a***@example.com today");
    }

    #[test]
    fn redact_text_keeps_newlines_and_indentation() {
        let output = redact_text("seed invalid:\n    user ann@example.com\tunknown\n");

        assert_eq!(output, "seed invalid:\n    user a***@example.com\tunknown\n");
    }
}
