//! Selection state: password length and character class flags.

use thiserror::Error;

use crate::pass::{CharClass, ClassFlags, charset};

/// Slider position. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const MIN: usize = 6;
    pub const MAX: usize = 15;
    pub const DEFAULT: usize = 10;

    pub fn new(n: usize) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// One step right on the slider, stopping at `MAX`.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0 + 1).unwrap_or(self)
    }

    /// One step left on the slider, stopping at `MIN`.
    #[must_use]
    pub fn decrement(self) -> Self {
        self.0.checked_sub(1).and_then(Self::new).unwrap_or(self)
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("At least one option must be selected.")]
    AllClassesDeselected,
}

/// Length plus class flags. At least one class is always selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    length: PasswordLength,
    flags: ClassFlags,
}

impl Selection {
    pub fn length(&self) -> PasswordLength {
        self.length
    }

    pub fn flags(&self) -> ClassFlags {
        self.flags
    }

    pub fn includes(&self, class: CharClass) -> bool {
        self.flags.get(class)
    }

    pub fn set_length(&mut self, length: PasswordLength) {
        self.length = length;
    }

    /// Flip `class`, unless that would leave no class selected.
    pub fn toggle(&mut self, class: CharClass) -> Result<(), SelectionError> {
        let proposed = self.flags.toggled(class);
        if !proposed.any() {
            return Err(SelectionError::AllClassesDeselected);
        }
        self.flags = proposed;
        Ok(())
    }

    pub fn alphabet(&self) -> String {
        charset::build(&self.flags)
    }

    /// Build a selection without the non-empty check.
    #[cfg(test)]
    pub(crate) fn unchecked(length: PasswordLength, flags: ClassFlags) -> Self {
        Self { length, flags }
    }
}
