pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod tokenizer;
pub mod ui;

pub use config::Config;
pub use error::{LoadError, TokenizeError};
pub use report::{
    render_breakdown, render_flat, render_outcome, render_plain, render_report, PlainOutput,
};
pub use tokenizer::{analyze, tokenize, Token, TokenKind, Tokenizer, DEFAULT_DELIMITER};
