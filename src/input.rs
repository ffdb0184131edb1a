//! Candidate password as seen by the classifier.

use secrecy::{ExposeSecret, SecretString};

/// Characters removed from a raw password before classification.
///
/// ASCII `\t \n \v \f \r` and space, the Unicode space separators, the
/// line and paragraph separators and U+FEFF. U+0085 (NEL) is kept.
pub(crate) fn is_password_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Whitespace-stripped candidate password.
///
/// Every whitespace character is removed from the raw value, interior ones
/// included, so `"a b c"` and `"abc"` are the same input. The stripped value
/// stays wrapped in a [`SecretString`]: it is zeroized on drop and prints as
/// redacted in `Debug` output.
#[derive(Debug)]
pub struct PasswordInput {
    secret: SecretString,
    len: usize,
}

impl PasswordInput {
    /// Strips whitespace from `raw` and wraps the result.
    pub fn from_raw(raw: &str) -> Self {
        let stripped: String = raw.chars().filter(|&c| !is_password_whitespace(c)).collect();
        let len = stripped.encode_utf16().count();
        Self {
            secret: SecretString::new(stripped.into()),
            len,
        }
    }

    /// Same as [`PasswordInput::from_raw`] for a value already held as a secret.
    pub fn from_secret(raw: &SecretString) -> Self {
        Self::from_raw(raw.expose_secret())
    }

    /// Length in UTF-16 code units after stripping; astral characters such
    /// as emoji count twice.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn chars(&self) -> std::str::Chars<'_> {
        self.secret.expose_secret().chars()
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::from_raw("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_strips_interior_whitespace() {
        let input = PasswordInput::from_raw(" a b\tc\nd ");
        assert_eq!(input.len(), 4);
        assert_eq!(input.chars().collect::<String>(), "abcd");
    }

    #[test]
    fn test_from_raw_only_whitespace_is_empty() {
        let input = PasswordInput::from_raw(" \t\r\n\u{00A0}\u{2003}");
        assert!(input.is_empty());
    }

    #[test]
    fn test_len_counts_utf16_units() {
        assert_eq!(PasswordInput::from_raw("abc123€€").len(), 8);
        assert_eq!(PasswordInput::from_raw("😀😀😀😀").len(), 8);
        assert_eq!(PasswordInput::from_raw("abc1!😀😀").len(), 9);
    }

    #[test]
    fn test_from_raw_strips_byte_order_mark() {
        let input = PasswordInput::from_raw("abcdefg\u{FEFF}");
        assert_eq!(input.len(), 7);
    }

    #[test]
    fn test_from_raw_keeps_next_line() {
        let input = PasswordInput::from_raw("abcdefg\u{0085}");
        assert_eq!(input.len(), 8);
        assert!(input.chars().any(|c| c == '\u{0085}'));
    }

    #[test]
    fn test_password_whitespace_set() {
        for c in ['\t', '\n', '\u{000B}', '\u{000C}', '\r', ' ', '\u{00A0}', '\u{1680}'] {
            assert!(is_password_whitespace(c), "{c:?} should be stripped");
        }
        for c in ['\u{2000}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_password_whitespace(c), "{c:?} should be stripped");
        }
        for c in ['\u{0085}', '\u{200B}', 'a', '_', '€'] {
            assert!(!is_password_whitespace(c), "{c:?} should be kept");
        }
    }

    #[test]
    fn test_from_secret_matches_from_raw() {
        let secret = SecretString::new("pass word".to_string().into());
        let input = PasswordInput::from_secret(&secret);
        assert_eq!(input.len(), 8);
    }

    #[test]
    fn test_debug_is_redacted() {
        let input = PasswordInput::from_raw("hunter22");
        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("hunter22"));
    }
}
