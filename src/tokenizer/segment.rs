//! Splitting input text into segments and segments into sub-parts.

use regex::Regex;
use std::sync::OnceLock;

/// A decimal number, a single punctuation character, or a run of anything
/// that is neither punctuation nor ASCII whitespace. Whitespace matches none
/// of the alternatives and so only ever separates parts.
const PART_PATTERN: &str = r"[0-9]+\.[0-9]+|\p{P}|[^ \t\n\x0B\x0C\r\p{P}]+";

static PART_REGEX: OnceLock<Regex> = OnceLock::new();

fn part_regex() -> &'static Regex {
    PART_REGEX.get_or_init(|| Regex::new(PART_PATTERN).expect("part pattern should be valid"))
}

/// Strip leading and trailing characters at or below U+0020: ASCII
/// whitespace and control characters. Other Unicode spaces are kept.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Split `text` on every literal occurrence of `delimiter`, trim each piece,
/// and drop the ones left empty.
pub fn split_segments(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter)
        .map(trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split a segment into sub-parts.
///
/// ASCII whitespace runs separate parts and are never emitted. Every
/// character in the Unicode punctuation category becomes a part of its own,
/// except the `.` of a decimal such as `3.14`, which stays inside the number.
pub fn split_parts(segment: &str) -> Vec<&str> {
    part_regex()
        .find_iter(segment)
        .map(|m| m.as_str())
        .collect()
}
