//! Clipboard bridge.
//!
//! Copies are fire-and-forget from the form's point of view: `submit` hands
//! the text over and returns immediately, and the outcome is collected later
//! with `poll`. The event loop drains outcomes between key presses, so the
//! form stays usable while a copy is in flight.

mod system;

use thiserror::Error;

pub use system::SystemClipboard;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Write(String),
    #[error("clipboard worker stopped")]
    Disconnected,
}

pub type CopyOutcome = Result<(), ClipboardError>;

pub trait ClipboardBridge {
    /// Start copying `text`. Never blocks on the platform clipboard.
    fn submit(&mut self, text: &str);

    /// Next finished copy, if any.
    fn poll(&mut self) -> Option<CopyOutcome>;
}

/// User-facing report of a finished copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    CopyFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Copied => "Password copied to clipboard!".to_string(),
            Notice::CopyFailed(reason) => format!("Failed to copy password: {reason}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::CopyFailed(_))
    }
}

impl From<CopyOutcome> for Notice {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            Ok(()) => Notice::Copied,
            Err(e) => Notice::CopyFailed(e.to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_messages() {
        assert_eq!(Notice::from(Ok(())).message(), "Password copied to clipboard!");

        let failed = Notice::from(Err(ClipboardError::Write("no display".into())));
        assert!(failed.is_failure());
        assert_eq!(failed.message(), "Failed to copy password: no display");
    }

    #[test]
    fn unavailable_reason_is_kept() {
        let notice = Notice::from(Err(ClipboardError::Unavailable("X11 missing".into())));
        assert_eq!(
            notice.message(),
            "Failed to copy password: clipboard unavailable: X11 missing"
        );
    }
}
