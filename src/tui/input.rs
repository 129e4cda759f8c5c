//! Key handling: focus order and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharClass;

/// The control that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Copy,
    Length,
    Class(CharClass),
    Generate,
}

impl Focus {
    /// Top-to-bottom order of the form's controls.
    pub const ORDER: [Focus; 7] = [
        Focus::Copy,
        Focus::Length,
        Focus::Class(CharClass::Lowercase),
        Focus::Class(CharClass::Uppercase),
        Focus::Class(CharClass::Numbers),
        Focus::Class(CharClass::Symbols),
        Focus::Generate,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    LengthUp,
    LengthDown,
    Toggle(CharClass),
    Generate,
    Copy,
    Quit,
}

pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Down | KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Up | KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Right if focus == Focus::Length => Some(Action::LengthUp),
        KeyCode::Left if focus == Focus::Length => Some(Action::LengthDown),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::LengthUp),
        KeyCode::Char('-') => Some(Action::LengthDown),
        KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char(d @ '1'..='4') => {
            let idx = d as usize - '1' as usize;
            Some(Action::Toggle(CharClass::ALL[idx]))
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(focus),
        _ => None,
    }
}

fn activate(focus: Focus) -> Option<Action> {
    match focus {
        Focus::Copy => Some(Action::Copy),
        Focus::Length => None,
        Focus::Class(class) => Some(Action::Toggle(class)),
        Focus::Generate => Some(Action::Generate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(Focus::Generate.next(), Focus::Copy);
        assert_eq!(Focus::Copy.prev(), Focus::Generate);
        assert_eq!(Focus::Copy.next(), Focus::Length);
    }

    #[test]
    fn digits_toggle_classes_in_order() {
        let expected = [
            CharClass::Lowercase,
            CharClass::Uppercase,
            CharClass::Numbers,
            CharClass::Symbols,
        ];
        for (d, class) in ['1', '2', '3', '4'].into_iter().zip(expected) {
            assert_eq!(
                map_key(key(KeyCode::Char(d)), Focus::Generate),
                Some(Action::Toggle(class))
            );
        }
        assert_eq!(map_key(key(KeyCode::Char('5')), Focus::Generate), None);
    }

    #[test]
    fn arrows_move_slider_only_when_focused() {
        assert_eq!(
            map_key(key(KeyCode::Right), Focus::Length),
            Some(Action::LengthUp)
        );
        assert_eq!(
            map_key(key(KeyCode::Left), Focus::Length),
            Some(Action::LengthDown)
        );
        assert_eq!(map_key(key(KeyCode::Right), Focus::Copy), None);
    }

    #[test]
    fn activation_depends_on_focus() {
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Copy), Some(Action::Copy));
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), Focus::Class(CharClass::Symbols)),
            Some(Action::Toggle(CharClass::Symbols))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), Focus::Generate),
            Some(Action::Generate)
        );
        assert_eq!(map_key(key(KeyCode::Enter), Focus::Length), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc), Focus::Copy), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('q')), Focus::Copy), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Focus::Copy), Some(Action::Quit));
    }
}
