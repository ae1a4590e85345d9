use super::LoadedText;
use crate::error::{load_file_safe, LoadError};
use std::path::Path;

/// Load a plain text file as tokenizer input.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);
    let text = load_file_safe(path)?;

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}
