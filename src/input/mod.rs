//! Sources of input text for the tokenizer.

use crate::error::LoadError;
use tracing::info;

pub mod clipboard;
pub mod file;

/// Text pulled from a source, with a label describing where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

/// Where to pull input text from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(String),
    Clipboard,
}

pub fn load(source: &Source) -> Result<LoadedText, LoadError> {
    let loaded = match source {
        Source::File(path) => file::load(path)?,
        Source::Clipboard => clipboard::load()?,
    };
    info!(source = %loaded.source, bytes = loaded.text.len(), "loaded input text");
    Ok(loaded)
}
