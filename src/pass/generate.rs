//! Password generation.

use std::fmt;

use rand::{Rng, RngCore};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please select at least one character type.")]
    EmptyAlphabet,
}

/// A generated password. Zeroized when dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Draw `length` characters uniformly, with replacement, from `alphabet`.
///
/// The random source is supplied by the caller; no cryptographic strength is
/// implied beyond what that source provides.
pub fn generate<R: RngCore + ?Sized>(
    alphabet: &str,
    length: usize,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let mut pass = String::with_capacity(length);
    for _ in 0..length {
        pass.push(chars[rng.gen_range(0..chars.len())]);
    }

    Ok(Password(pass))
}
