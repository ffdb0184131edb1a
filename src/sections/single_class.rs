//! Single-class section - detects passwords drawn from one character class.

use crate::input::{PasswordInput, is_password_whitespace};

fn all_non_empty(password: &PasswordInput, predicate: impl Fn(char) -> bool) -> bool {
    !password.is_empty() && password.chars().all(predicate)
}

/// Every character is an ASCII letter.
pub fn only_letters(password: &PasswordInput) -> bool {
    all_non_empty(password, |c| c.is_ascii_alphabetic())
}

/// Every character is an ASCII decimal digit.
pub fn only_digits(password: &PasswordInput) -> bool {
    all_non_empty(password, |c| c.is_ascii_digit())
}

/// Every character is a symbol: not an ASCII word character
/// (`[A-Za-z0-9_]`) and not whitespace.
///
/// Unlike the strong check, this accepts any such character, `€` included.
pub fn only_symbols(password: &PasswordInput) -> bool {
    all_non_empty(password, |c| {
        !(c.is_ascii_alphanumeric() || c == '_' || is_password_whitespace(c))
    })
}

/// Returns `true` if the password is made of letters only, digits only or
/// symbols only.
pub fn single_class_section(password: &PasswordInput) -> bool {
    only_digits(password) || only_letters(password) || only_symbols(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_letters() {
        assert!(only_letters(&PasswordInput::from_raw("abcdEFGH")));
        assert!(!only_letters(&PasswordInput::from_raw("abcd1")));
        // Non-ASCII letters are not letters here.
        assert!(!only_letters(&PasswordInput::from_raw("päßwörd")));
    }

    #[test]
    fn test_only_digits() {
        assert!(only_digits(&PasswordInput::from_raw("0123456789")));
        assert!(!only_digits(&PasswordInput::from_raw("12345x")));
        assert!(!only_digits(&PasswordInput::from_raw("١٢٣٤")));
    }

    #[test]
    fn test_only_symbols() {
        assert!(only_symbols(&PasswordInput::from_raw("!@#$%^&*")));
        assert!(only_symbols(&PasswordInput::from_raw("€€€€")));
        assert!(!only_symbols(&PasswordInput::from_raw("!@#_")));
        assert!(!only_symbols(&PasswordInput::from_raw("!@#a")));
    }

    #[test]
    fn test_empty_is_no_class() {
        let pwd = PasswordInput::from_raw("");
        assert!(!only_letters(&pwd));
        assert!(!only_digits(&pwd));
        assert!(!only_symbols(&pwd));
        assert!(!single_class_section(&pwd));
    }

    #[test]
    fn test_single_class_section_mixed() {
        assert!(!single_class_section(&PasswordInput::from_raw("abc12345")));
        assert!(!single_class_section(&PasswordInput::from_raw("________")));
    }
}
