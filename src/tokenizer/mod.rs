//! Delimiter-driven tokenizer.
//!
//! Input text is split on a literal delimiter into segments, each segment is
//! split into sub-parts, and each sub-part is classified. Parts no rule
//! accepts are dropped silently.

pub mod classify;
pub mod segment;
pub mod token;

pub use classify::{classify, PUNCTUATION_SET};
pub use segment::{split_parts, split_segments, trim};
pub use token::{Token, TokenKind};

use crate::error::TokenizeError;
use tracing::{debug, trace};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '~';

/// Tokenizer bound to a segment delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    delimiter: char,
}

impl Tokenizer {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Tokenize `text` without checking that the delimiter is present.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text, self.delimiter)
    }

    /// Tokenize `text`, failing with `MissingDelimiter` if the delimiter
    /// never occurs in it.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        analyze(text, self.delimiter)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

/// Split `text` on `delimiter` and classify every sub-part, in input order.
pub fn tokenize(text: &str, delimiter: char) -> Vec<Token> {
    let segments = split_segments(text, delimiter);
    let mut tokens = Vec::new();
    let mut dropped = 0usize;

    for segment in &segments {
        for part in split_parts(segment) {
            let part = trim(part);
            if part.is_empty() {
                continue;
            }
            match classify(part) {
                Some(kind) => tokens.push(Token::new(part, kind)),
                None => {
                    trace!(part, "dropping unclassifiable part");
                    dropped += 1;
                }
            }
        }
    }

    debug!(
        segments = segments.len(),
        tokens = tokens.len(),
        dropped,
        "tokenized input"
    );
    tokens
}

/// Check that `delimiter` occurs in `text`, then tokenize it.
pub fn analyze(text: &str, delimiter: char) -> Result<Vec<Token>, TokenizeError> {
    if !text.contains(delimiter) {
        return Err(TokenizeError::MissingDelimiter(delimiter));
    }
    Ok(tokenize(text, delimiter))
}
