use std::fmt;

/// Closed set of token categories produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Alphanumeric,
    EndOfLine,
}

impl TokenKind {
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Word,
        TokenKind::Number,
        TokenKind::Punctuation,
        TokenKind::Alphanumeric,
        TokenKind::EndOfLine,
    ];

    /// Inverse of [`TokenKind::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Label used in the flat listing (`Type: <label>`).
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Word => "Word",
            TokenKind::Number => "Number",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Alphanumeric => "Alphanumeric",
            TokenKind::EndOfLine => "End of Line",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified sub-part of the input. `value` is already trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}
