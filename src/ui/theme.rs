use crate::tokenizer::TokenKind;
use ratatui::style::Color;

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            error: Color::Rgb(247, 118, 142),   // #F7768E
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }

    /// Color used for a token type label in the output pane.
    pub fn kind_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Word => self.text,
            TokenKind::Number => Color::Rgb(255, 158, 100), // #FF9E64
            TokenKind::Punctuation => self.dimmed,
            TokenKind::Alphanumeric => Color::Rgb(158, 206, 106), // #9ECE6A
            TokenKind::EndOfLine => self.accent,
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
