//! Alphabet building and password generation.

pub mod charset;
mod generate;

pub use charset::{CharClass, ClassFlags};
pub use generate::{GenerateError, Password, generate};
