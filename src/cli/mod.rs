//! Command-line arguments.

mod flags;
mod parse;
pub mod prompts;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};
