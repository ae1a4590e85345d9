//! Text rendering of a token sequence.
//!
//! The full report is the flat listing, a separator line, and the per-character
//! breakdown, each under its own header.

use crate::error::TokenizeError;
use crate::tokenizer::{Token, Tokenizer};
use std::fmt::Write;

pub const FLAT_HEADER: &str = "Phase 1 Output:";
pub const BREAKDOWN_HEADER: &str = "Phase 2 Output (Granular Breakdown):";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 51;

/// `Token: "<value>" - Type: <type>` for every token, one per line.
pub fn render_flat(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "Token: \"{}\" - Type: {}", token.value, token.kind);
    }
    out
}

/// Each character quoted and comma-separated: `'a', 'b'`.
pub fn render_chars(value: &str) -> String {
    value
        .chars()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Token: "<value>" -> 'c', 'h', ...` for every token, one per line.
pub fn render_breakdown(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "Token: \"{}\" -> {}",
            token.value,
            render_chars(&token.value)
        );
    }
    out
}

pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

/// Both views with headers and the separator line between them.
pub fn render_report(tokens: &[Token], separator_width: usize) -> String {
    let mut out = String::new();
    out.push_str(FLAT_HEADER);
    out.push('\n');
    out.push_str(&render_flat(tokens));
    out.push_str(&separator(separator_width));
    out.push('\n');
    out.push_str(BREAKDOWN_HEADER);
    out.push('\n');
    out.push_str(&render_breakdown(tokens));
    out
}

/// The report for a successful analysis, or the error line in its place.
pub fn render_outcome(outcome: &Result<Vec<Token>, TokenizeError>, separator_width: usize) -> String {
    match outcome {
        Ok(tokens) => render_report(tokens, separator_width),
        Err(err) => err.to_string(),
    }
}

/// Stdout text and process exit status for non-interactive runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainOutput {
    pub stdout: String,
    pub exit_code: i32,
}

/// Tokenize `text` and decide what a non-interactive run prints and returns.
/// A missing delimiter prints the error line and exits with status 1.
pub fn render_plain(text: &str, delimiter: char, separator_width: usize) -> PlainOutput {
    let outcome = Tokenizer::new(delimiter).analyze(text);
    let mut stdout = render_outcome(&outcome, separator_width);
    let exit_code = match outcome {
        Ok(_) => 0,
        Err(_) => {
            stdout.push('\n');
            1
        }
    };
    PlainOutput { stdout, exit_code }
}
