// Configuration for the tokenizer and its front ends.
// Every field has a default so a partial JSON file is valid.

use crate::error::LoadError;
use crate::report::DEFAULT_SEPARATOR_WIDTH;
use crate::tokenizer::DEFAULT_DELIMITER;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Segment delimiter (default `~`)
    pub delimiter: char,

    /// Number of `=` characters in the line between the two report views
    pub separator_width: usize,

    /// tracing filter directive, e.g. `warn` or `tokenscope=debug`
    pub log_level: String,

    /// Log destination in interactive mode. Unset disables logging there.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = crate::error::load_file_safe(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::Config(e.to_string()))
    }
}
