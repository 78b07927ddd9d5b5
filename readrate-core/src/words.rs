//! Whitespace tokenization

/// Whether `c` separates words
///
/// This is the ECMAScript `\s` class: ASCII whitespace plus the Unicode space
/// separators, line and paragraph separators, and the byte order mark. Unlike
/// [`char::is_whitespace`], U+0085 (NEL) is not a separator and U+FEFF is.
#[inline]
pub fn is_separator(c: char) -> bool {
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

/// Count whitespace-delimited tokens of `text`
///
/// The text is trimmed and split on runs of separators. A non-empty text made
/// only of separators still yields a single empty token, so the result is 1.
/// Only the empty string counts as zero words.
///
/// ```
/// use readrate_core::words::count_words;
///
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words("  hello \n\t world  "), 2);
/// assert_eq!(count_words("   "), 1);
/// ```
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    text.trim_matches(is_separator)
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .count()
        .max(1)
}

/// Whether `text` is non-empty but contains nothing besides separators
pub fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(count_words(""), 0);
        assert!(!is_blank(""));
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("one two three four five six seven eight"), 8);
    }

    #[test]
    fn test_runs_of_whitespace_collapse() {
        assert_eq!(count_words("a  b\t\tc\n\n\nd"), 4);
        assert_eq!(count_words("\r\na\r\nb\r\n"), 2);
    }

    #[test]
    fn test_whitespace_only_is_one_token() {
        assert_eq!(count_words(" "), 1);
        assert_eq!(count_words("\t\n  \r"), 1);
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_unicode_separators() {
        assert_eq!(count_words("a\u{00A0}b"), 2);
        assert_eq!(count_words("a\u{3000}b\u{2003}c"), 3);
        assert_eq!(count_words("\u{FEFF}bonjour\u{FEFF}"), 1);
        assert_eq!(count_words("a\u{2028}b\u{2029}c"), 3);
    }

    #[test]
    fn test_next_line_is_not_a_separator() {
        assert!(!is_separator('\u{0085}'));
        assert_eq!(count_words("a\u{0085}b"), 1);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(count_words("Hello, world! It's 3.14."), 4);
    }

    #[test]
    fn test_cjk_without_spaces_is_one_token() {
        assert_eq!(count_words("你好世界"), 1);
        assert_eq!(count_words("こんにちは 世界"), 2);
    }
}
