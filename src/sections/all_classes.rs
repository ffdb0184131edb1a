//! All-classes section - checks for letters, digits and allow-listed symbols.

use crate::input::PasswordInput;

/// Symbols that count toward the strong tier.
///
/// Punctuation outside this list (`€`, `¥`, `§`, ...) does not.
pub const SYMBOL_ALLOW_LIST: &str = "`!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

/// Returns `true` if `c` is in [`SYMBOL_ALLOW_LIST`].
pub fn is_allow_listed_symbol(c: char) -> bool {
    SYMBOL_ALLOW_LIST.contains(c)
}

/// Returns `true` if the password holds at least one ASCII letter, one
/// ASCII digit and one allow-listed symbol.
pub fn all_classes_section(password: &PasswordInput) -> bool {
    let (mut has_letter, mut has_digit, mut has_symbol) = (false, false, false);
    for c in password.chars() {
        has_letter |= c.is_ascii_alphabetic();
        has_digit |= c.is_ascii_digit();
        has_symbol |= is_allow_listed_symbol(c);
        if has_letter && has_digit && has_symbol {
            return true;
        }
    }
    false
}
