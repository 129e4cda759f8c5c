//! The password form: selection state and the controller that owns it.

mod controller;
mod selection;

pub use controller::{CopyRequest, PasswordForm};
pub use selection::{PasswordLength, Selection, SelectionError};
