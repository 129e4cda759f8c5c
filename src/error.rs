//! Errors that end the program.
//!
//! Form validation errors never get here; they are shown on the form.

use std::io;

use thiserror::Error;

use crate::cli::ParseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ParseError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Args(_) => 2,
            AppError::Io(_) | AppError::Logging(_) => 1,
        }
    }
}
