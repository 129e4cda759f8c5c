//! Interactive password form.

mod input;
mod render;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{debug, info, warn};

use crate::clipboard::{ClipboardBridge, Notice, SystemClipboard};
use crate::form::{CopyRequest, PasswordForm};
use crate::settings::Settings;
use crate::terminal::{ScreenGuard, clear, draw_frame, reset_terminal};

pub use input::{Action, Focus, map_key};
pub use render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Form plus presentation state (focus, last clipboard notice).
pub struct App {
    pub form: PasswordForm,
    pub focus: Focus,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(form: PasswordForm) -> Self {
        Self {
            form,
            focus: Focus::Generate,
            notice: None,
        }
    }

    /// Apply one action. Returns false when the user asked to quit.
    pub fn apply<B: ClipboardBridge + ?Sized>(&mut self, action: Action, clipboard: &mut B) -> bool {
        match action {
            Action::Quit => return false,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::LengthUp => {
                let length = self.form.selection().length().increment();
                self.form.set_length(length);
            }
            Action::LengthDown => {
                let length = self.form.selection().length().decrement();
                self.form.set_length(length);
            }
            Action::Toggle(class) => {
                let _ = self.form.toggle_class(class);
            }
            Action::Generate => {
                if self.form.generate().is_ok() {
                    self.notice = None;
                }
            }
            Action::Copy => {
                if self.form.copy_password(clipboard) == CopyRequest::Submitted {
                    self.notice = None;
                }
            }
        }
        true
    }

    /// Turn finished copies into notices. Returns true if anything arrived.
    pub fn drain_clipboard<B: ClipboardBridge + ?Sized>(&mut self, clipboard: &mut B) -> bool {
        let mut changed = false;
        while let Some(outcome) = clipboard.poll() {
            if let Err(e) = &outcome {
                warn!(error = %e, "clipboard copy failed");
            } else {
                debug!("clipboard copy finished");
            }
            self.notice = Some(Notice::from(outcome));
            changed = true;
        }
        changed
    }

    fn draw(&self) -> io::Result<()> {
        draw_frame(&render(&self.form, self.focus, self.notice.as_ref()))
    }
}

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> io::Result<()> {
    let form = match settings.seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            PasswordForm::seeded(seed)
        }
        None => PasswordForm::from_entropy(),
    };
    let mut app = App::new(form);
    let mut clipboard = SystemClipboard::spawn();

    let mut guard = ScreenGuard::new()?;
    let result = event_loop(&mut app, &mut clipboard);
    guard.restore();

    reset_terminal();
    clear();
    result
}

fn event_loop(app: &mut App, clipboard: &mut SystemClipboard) -> io::Result<()> {
    app.draw()?;

    loop {
        let mut dirty = false;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(key, app.focus) {
                        if !app.apply(action, clipboard) {
                            info!("quit requested");
                            return Ok(());
                        }
                        dirty = true;
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        dirty |= app.drain_clipboard(clipboard);

        if dirty {
            app.draw()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::form::PasswordLength;
    use crate::pass::CharClass;

    #[test]
    fn copy_before_generate_is_a_no_op() {
        let mut app = App::new(PasswordForm::seeded(1));
        let mut clipboard = RecordingClipboard::default();

        assert!(app.apply(Action::Copy, &mut clipboard));
        assert!(clipboard.submitted.is_empty());
        assert!(!app.drain_clipboard(&mut clipboard));
        assert!(app.notice.is_none());
    }

    #[test]
    fn copy_success_sets_notice() {
        let mut app = App::new(PasswordForm::seeded(2));
        let mut clipboard = RecordingClipboard::default();

        app.apply(Action::Generate, &mut clipboard);
        app.apply(Action::Copy, &mut clipboard);
        assert!(app.drain_clipboard(&mut clipboard));
        assert_eq!(app.notice, Some(Notice::Copied));
        assert_eq!(clipboard.submitted.len(), 1);
    }

    #[test]
    fn copy_failure_carries_reason() {
        let mut app = App::new(PasswordForm::seeded(3));
        let mut clipboard = RecordingClipboard::failing("no display");

        app.apply(Action::Generate, &mut clipboard);
        app.apply(Action::Copy, &mut clipboard);
        app.drain_clipboard(&mut clipboard);
        assert_eq!(app.notice, Some(Notice::CopyFailed("no display".into())));
    }

    #[test]
    fn form_stays_usable_while_copy_pending() {
        let mut app = App::new(PasswordForm::seeded(4));
        let mut clipboard = RecordingClipboard::default();

        app.apply(Action::Generate, &mut clipboard);
        app.apply(Action::Copy, &mut clipboard);
        app.apply(Action::Toggle(CharClass::Symbols), &mut clipboard);
        app.apply(Action::Generate, &mut clipboard);

        assert!(app.form.selection().includes(CharClass::Symbols));
        app.drain_clipboard(&mut clipboard);
        assert_eq!(app.notice, Some(Notice::Copied));
    }

    #[test]
    fn slider_actions_stay_in_range() {
        let mut app = App::new(PasswordForm::seeded(5));
        let mut clipboard = RecordingClipboard::default();

        for _ in 0..20 {
            app.apply(Action::LengthUp, &mut clipboard);
        }
        assert_eq!(app.form.selection().length().get(), PasswordLength::MAX);

        for _ in 0..20 {
            app.apply(Action::LengthDown, &mut clipboard);
        }
        assert_eq!(app.form.selection().length().get(), PasswordLength::MIN);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = App::new(PasswordForm::seeded(6));
        let mut clipboard = RecordingClipboard::default();
        assert!(!app.apply(Action::Quit, &mut clipboard));
    }

    #[test]
    fn rejected_toggle_shows_error() {
        let mut app = App::new(PasswordForm::seeded(7));
        let mut clipboard = RecordingClipboard::default();

        app.apply(Action::Toggle(CharClass::Lowercase), &mut clipboard);
        assert_eq!(
            app.form.error(),
            Some("At least one option must be selected.")
        );
        assert!(app.form.selection().includes(CharClass::Lowercase));
    }
}
