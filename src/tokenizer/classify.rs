//! Token classification.
//!
//! Rules are evaluated top to bottom and the first predicate that accepts a
//! part decides its kind. Parts no rule accepts are dropped by the caller.

use super::token::TokenKind;

/// Single-character parts accepted as `Punctuation`.
pub const PUNCTUATION_SET: &[char] = &['.', ',', '!', '?', ';', ':', '-'];

type Predicate = fn(&str) -> bool;

/// Ordered rule table. Order is significant: `Word` and `Number` must be
/// checked before `Alphanumeric`, which would otherwise swallow both.
pub const RULES: &[(Predicate, TokenKind)] = &[
    (is_word, TokenKind::Word),
    (is_number, TokenKind::Number),
    (is_punctuation, TokenKind::Punctuation),
    (is_alphanumeric, TokenKind::Alphanumeric),
    (is_end_of_line, TokenKind::EndOfLine),
];

/// Classify a trimmed part. Returns `None` for empty or unrecognised input.
pub fn classify(part: &str) -> Option<TokenKind> {
    if part.is_empty() {
        return None;
    }

    RULES
        .iter()
        .find(|(predicate, _)| predicate(part))
        .map(|&(_, kind)| kind)
}

fn is_word(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Digits, optionally followed by `.` and more digits.
fn is_number(part: &str) -> bool {
    match part.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(part),
    }
}

fn is_punctuation(part: &str) -> bool {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION_SET.contains(&c),
        _ => false,
    }
}

fn is_alphanumeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric())
}

// Unreachable through `tokenize`: whitespace runs never survive segmentation.
fn is_end_of_line(part: &str) -> bool {
    part == "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty_is_none() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_words() {
        assert_eq!(classify("hello"), Some(TokenKind::Word));
        assert_eq!(classify("ABCdef"), Some(TokenKind::Word));
        assert_eq!(classify("a"), Some(TokenKind::Word));
    }

    #[test]
    fn test_classify_non_ascii_letters_dropped() {
        assert_eq!(classify("café"), None);
        assert_eq!(classify("日本"), None);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify("42"), Some(TokenKind::Number));
        assert_eq!(classify("3.14"), Some(TokenKind::Number));
        assert_eq!(classify("0.5"), Some(TokenKind::Number));
    }

    #[test]
    fn test_classify_malformed_numbers() {
        assert_eq!(classify("3."), None);
        assert_eq!(classify(".5"), None);
        assert_eq!(classify("1.2.3"), None);
    }

    #[test]
    fn test_classify_punctuation_set() {
        for c in PUNCTUATION_SET {
            assert_eq!(
                classify(&c.to_string()),
                Some(TokenKind::Punctuation),
                "{c:?} should be punctuation"
            );
        }
    }

    #[test]
    fn test_classify_punctuation_outside_set_dropped() {
        assert_eq!(classify("("), None);
        assert_eq!(classify("\""), None);
        assert_eq!(classify("@"), None);
        assert_eq!(classify(".."), None);
    }

    #[test]
    fn test_classify_alphanumeric() {
        assert_eq!(classify("abc123"), Some(TokenKind::Alphanumeric));
        assert_eq!(classify("1st"), Some(TokenKind::Alphanumeric));
    }

    #[test]
    fn test_word_and_number_win_over_alphanumeric() {
        assert_eq!(classify("abc"), Some(TokenKind::Word));
        assert_eq!(classify("123"), Some(TokenKind::Number));
    }

    #[test]
    fn test_classify_end_of_line_rule_is_kept() {
        assert_eq!(classify("\n"), Some(TokenKind::EndOfLine));
        assert_eq!(classify("\r\n"), None);
    }

    #[test]
    fn test_classify_mixed_symbols_dropped() {
        assert_eq!(classify("a$b"), None);
        assert_eq!(classify("x+y"), None);
    }

    #[test]
    fn test_rule_order() {
        let kinds: Vec<TokenKind> = RULES.iter().map(|&(_, k)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Punctuation,
                TokenKind::Alphanumeric,
                TokenKind::EndOfLine,
            ]
        );
    }
}
