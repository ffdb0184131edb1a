//! Length section - checks the minimum length gate.

use crate::input::PasswordInput;

/// Returns `true` if the password has at least `min_length` characters.
pub fn length_section(password: &PasswordInput, min_length: usize) -> bool {
    password.len() >= min_length
}
