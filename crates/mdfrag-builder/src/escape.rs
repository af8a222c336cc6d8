//! Escaping of Markdown-significant punctuation.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Every character that gets a backslash in front of it: the 32 ASCII
/// punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

static PUNCTUATION_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| PUNCTUATION.chars().collect());

/// Check whether `c` is escaped by [`escape`].
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION_SET.contains(&c)
}

/// Escape Markdown punctuation with a backslash.
///
/// Input is walked by `char`, so multi-byte characters pass through intact.
///
/// # Example
///
/// ```
/// use mdfrag_builder::escape;
/// assert_eq!(escape("1. *not* a list"), r"1\. \*not\* a list");
/// assert_eq!(escape("naïve café"), "naïve café");
/// ```
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for ch in input.chars() {
        if is_punctuation(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_set_is_ascii_punctuation() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        for c in '\0'..='\u{7f}' {
            assert_eq!(is_punctuation(c), c.is_ascii_punctuation(), "{c:?}");
        }
    }

    #[test]
    fn test_underscore_and_backtick_escaped() {
        assert_eq!(escape("snake_case"), r"snake\_case");
        assert_eq!(escape("`tick`"), r"\`tick\`");
    }

    #[test]
    fn test_escape_every_punctuation() {
        let escaped = escape(PUNCTUATION);
        assert_eq!(escaped.len(), PUNCTUATION.len() * 2);
        assert!(escaped
            .chars()
            .step_by(2)
            .all(|c| c == '\\'));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("Hello world 42"), "Hello world 42");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_multibyte_untouched() {
        assert_eq!(escape("日本語!"), "日本語\\!");
        assert_eq!(escape("🦀(rust)"), "🦀\\(rust\\)");
        // Fullwidth punctuation is not ASCII and stays as is.
        assert_eq!(escape("！＃"), "！＃");
    }

    #[test]
    fn test_backslash_doubled() {
        assert_eq!(escape(r"C:\dir"), r"C\:\\dir");
    }
}
