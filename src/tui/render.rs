//! Form rendering.

use crate::clipboard::Notice;
use crate::form::{PasswordForm, PasswordLength};
use crate::pass::CharClass;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, REVERSE, box_bottom, box_line, box_rule, box_top, styled,
};

use super::input::Focus;

const KEY_HINTS: &str = "↑/↓ move • ←/→ length • Space select • g generate • c copy • q quit";

/// Lay out the whole form as screen lines.
pub fn render(form: &PasswordForm, focus: Focus, notice: Option<&Notice>) -> Vec<String> {
    let selection = form.selection();
    let mut lines = Vec::with_capacity(16);

    lines.push(box_top("Password Generator"));
    lines.push(box_line(&password_row(form, focus)));
    lines.push(box_rule());

    lines.push(box_line(&focused(
        focus == Focus::Length,
        &format!("Character length {}", selection.length().get()),
    )));
    lines.push(box_line(&slider(selection.length())));
    lines.push(box_line(""));

    for class in CharClass::ALL {
        let mark = if selection.includes(class) { "x" } else { " " };
        lines.push(box_line(&focused(
            focus == Focus::Class(class),
            &format!("[{mark}] {}", class.label()),
        )));
    }

    lines.push(box_line(""));
    lines.push(box_line(&button("Generate", true, focus == Focus::Generate)));
    lines.push(box_bottom());

    if let Some(error) = form.error() {
        lines.push(styled(RED, error));
    }
    if let Some(notice) = notice {
        let color = if notice.is_failure() { RED } else { GREEN };
        lines.push(styled(color, &notice.message()));
    }

    lines.push(String::new());
    lines.push(styled(DIM, KEY_HINTS));
    lines
}

fn password_row(form: &PasswordForm, focus: Focus) -> String {
    let field = format!(
        "[ {:<width$} ]",
        form.password().as_str(),
        width = PasswordLength::MAX
    );
    let copy = button("Copy", form.can_copy(), focus == Focus::Copy);
    format!("{field}  {copy}")
}

fn button(label: &str, enabled: bool, has_focus: bool) -> String {
    let text = format!("[ {label} ]");
    if !enabled {
        styled(DIM, &text)
    } else if has_focus {
        styled(REVERSE, &text)
    } else {
        styled(BOLD, &text)
    }
}

fn focused(has_focus: bool, text: &str) -> String {
    if has_focus {
        format!("> {}", styled(REVERSE, text))
    } else {
        format!("  {text}")
    }
}

fn slider(length: PasswordLength) -> String {
    let track: String = (PasswordLength::MIN..=PasswordLength::MAX)
        .map(|n| if n == length.get() { '●' } else { '─' })
        .collect();
    format!("  {} {track} {}", PasswordLength::MIN, PasswordLength::MAX)
}
