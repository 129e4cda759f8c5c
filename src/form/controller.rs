//! Password form controller.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, warn};

use super::selection::{PasswordLength, Selection, SelectionError};
use crate::clipboard::ClipboardBridge;
use crate::pass::{self, CharClass, GenerateError, Password};

/// What a copy request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRequest {
    /// Nothing generated yet; the clipboard was not touched.
    Skipped,
    Submitted,
}

/// Owns the selection, the last generated password and the error line.
pub struct PasswordForm {
    selection: Selection,
    password: Password,
    error: Option<String>,
    rng: Box<dyn RngCore>,
}

impl PasswordForm {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self {
            selection: Selection::default(),
            password: Password::default(),
            error: None,
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(StdRng::from_entropy()))
    }

    /// Reproducible passwords for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Copy is only offered once something has been generated.
    pub fn can_copy(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn set_length(&mut self, length: PasswordLength) {
        debug!(length = length.get(), "length changed");
        self.selection.set_length(length);
    }

    pub fn toggle_class(&mut self, class: CharClass) -> Result<(), SelectionError> {
        match self.selection.toggle(class) {
            Ok(()) => {
                debug!(?class, flags = ?self.selection.flags(), "class toggled");
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(?class, "rejected toggle that would clear every class");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replace the password with a fresh one drawn from the current selection.
    ///
    /// On failure the previous password stays as it was.
    pub fn generate(&mut self) -> Result<(), GenerateError> {
        let alphabet = self.selection.alphabet();
        let length = self.selection.length().get();

        match pass::generate(&alphabet, length, self.rng.as_mut()) {
            Ok(password) => {
                debug!(length, alphabet = alphabet.len(), "password generated");
                self.password = password;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("generate called with an empty alphabet");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn copy_password<B: ClipboardBridge + ?Sized>(&self, bridge: &mut B) -> CopyRequest {
        if self.password.is_empty() {
            debug!("copy skipped, nothing generated");
            return CopyRequest::Skipped;
        }
        bridge.submit(self.password.as_str());
        CopyRequest::Submitted
    }

    #[cfg(test)]
    pub(crate) fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }
}
