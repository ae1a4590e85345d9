use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to tokenize a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The input never contains the segment delimiter.
    #[error("Error: No delimiter found.")]
    MissingDelimiter(char),
}

/// Failure to load input text from a source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Read a UTF-8 text file, rejecting missing and whitespace-only files.
pub fn load_file_safe(path: impl Into<PathBuf>) -> Result<String, LoadError> {
    let path = path.into();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path));
    }

    Ok(content)
}
